
pub struct Rectangle {
    pub length: i32,
    pub width: i32,
}

impl Rectangle {
    pub fn area(&self) -> i32 {
        self.length * self.width
    }
}

impl Rectangle {
    pub fn new(length: i32, width: i32) -> Self {
        Self {
            length,
            width,
        }
    }
}
