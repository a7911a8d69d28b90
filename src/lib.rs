pub mod error;
pub mod rectangle;
pub mod scanner;


use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::rectangle::Rectangle;
use crate::scanner::Scanner;

pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), AppError> {
    let mut scanner = Scanner::new(input);

    writeln!(output, "Enter the length of the rectangle:")?;
    let length = scanner.next_int()?;
    writeln!(output, "Enter the width of the rectangle:")?;
    let width = scanner.next_int()?;

    let rectangle = Rectangle::new(length, width);
    writeln!(output, "The area of the rectangle is: {}", rectangle.area())?;

    Ok(())
}
