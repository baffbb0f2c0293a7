use crate::console::Console;

/// Plain integer holder, read-only after construction
#[derive(Debug, fieldwork::Fieldwork)]
#[fieldwork(get)]
pub struct AnotherClass {
    #[fieldwork(get(copy))]
    another_data_member: i32,
    #[fieldwork(skip)]
    console: Console,
}

impl AnotherClass {
    pub fn new(console: &Console, value: i32) -> Self {
        Self {
            another_data_member: value,
            console: console.clone(),
        }
    }

    pub fn display(&self) {
        self.console.write_line(format!(
            "AnotherClass data member: {}",
            self.another_data_member
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_stored_value() {
        let console = Console::capturing();
        let another = AnotherClass::new(&console, -3);
        assert_eq!(another.another_data_member(), -3);
        another.display();
        assert_eq!(console.lines(), ["AnotherClass data member: -3"]);
    }
}
