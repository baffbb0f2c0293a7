#![deny(dead_code)]

pub mod another_class;
pub mod console;
pub mod external;
pub mod my_class;
pub mod walkthrough;


pub use another_class::AnotherClass;
pub use console::Console;
pub use my_class::MyClass;
