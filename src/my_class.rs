use anyhow::{anyhow, Result};

use crate::another_class::AnotherClass;
use crate::console::Console;
use crate::external;

/// An integer and a text field, with the usual spread of member patterns on top
///
/// The generated `data_member`/`set_data_member` and
/// `other_data_member`/`set_other_data_member` pairs are property-style
/// accessors; the explicit `get_*` and `change_*` methods do the same thing.
///
/// Every instance writes one line to its console when it is dropped.
#[derive(Debug, fieldwork::Fieldwork)]
#[fieldwork(get, set)]
pub struct MyClass {
    #[fieldwork(get(copy))]
    data_member: i32,
    other_data_member: String,
    #[fieldwork(skip)]
    console: Console,
}

impl MyClass {
    pub fn new(console: &Console, value: i32, text: impl Into<String>) -> Self {
        let text = text.into();
        log::debug!("constructing MyClass({value}, {text:?})");
        console.write_line(format!(
            "Constructor called with value: {value} and strValue: {text}"
        ));
        Self {
            data_member: value,
            other_data_member: text,
            console: console.clone(),
        }
    }

    /// Duplicate both fields of `other`. The copy shares `other`'s console and
    /// nothing else.
    pub fn copy_from(other: &MyClass) -> Self {
        log::debug!(
            "copying MyClass({}, {:?})",
            other.data_member,
            other.other_data_member
        );
        other.console.write_line("Copy constructor called.");
        Self {
            data_member: other.data_member,
            other_data_member: other.other_data_member.clone(),
            console: other.console.clone(),
        }
    }

    /// Like [`MyClass::copy_from`], but for a source that may be missing
    pub fn try_copy_from(other: Option<&MyClass>) -> Result<Self> {
        other
            .map(Self::copy_from)
            .ok_or_else(|| anyhow!("cannot copy MyClass: source instance is absent"))
    }

    pub fn empty_method(&self) {
        // This method intentionally left blank
    }

    pub fn display_non_data_member(&self) {
        external::another_external_function(&self.console, &self.other_data_member);
    }

    pub fn wrap_external_function(&self) {
        external::external_function(&self.console);
    }

    /// Build a fresh instance from the arguments. Does not read `self`'s fields.
    pub fn create_object(&self, value: i32, text: impl Into<String>) -> MyClass {
        MyClass::new(&self.console, value, text)
    }

    pub fn get_non_primitive_data_member(&self) -> &str {
        &self.other_data_member
    }

    pub fn get_data_member(&self) -> i32 {
        self.data_member
    }

    pub fn is_data_member_positive(&self) -> bool {
        self.data_member > 0
    }

    /// Plain `i32` multiplication: traps on overflow in debug builds and wraps
    /// in release builds.
    pub fn double_data_member(&self) -> i32 {
        self.data_member * 2
    }

    /// Add this instance's integer to the caller's accumulator in place
    pub fn add_data_member(&self, param: &mut i32) {
        *param += self.data_member;
    }

    pub fn call_on_local_object(&self) {
        let local = MyClass::new(&self.console, 5, "test");
        local.get_data_member();
    }

    pub fn call_on_local_object_of_another_class(&self) {
        let local = AnotherClass::new(&self.console, 5);
        local.display();
    }

    pub fn change_many_attributes(&mut self, value: i32, text: impl Into<String>) {
        self.data_member = value;
        self.other_data_member = text.into();
    }

    pub fn change_attribute(&mut self, value: i32) {
        self.data_member = value;
    }

    /// Sum a fixed list of numbers, print the result and return it
    pub fn do_local_computation(&self) -> i32 {
        let numbers = [1, 2, 3, 4, 5];
        let sum: i32 = numbers.iter().sum();
        self.console.write_line(format!("Sum of local numbers: {sum}"));
        sum
    }
}

impl Clone for MyClass {
    fn clone(&self) -> Self {
        Self::copy_from(self)
    }
}

impl Drop for MyClass {
    fn drop(&mut self) {
        log::debug!(
            "dropping MyClass({}, {:?})",
            self.data_member,
            self.other_data_member
        );
        self.console.write_line("Destructor called for MyClass object.");
    }
}

// Free functions with access to MyClass internals

pub fn get_data_member_friend(obj: &MyClass) -> i32 {
    obj.data_member
}

pub fn set_data_member_friend(obj: &mut MyClass, value: i32) {
    obj.set_data_member(value);
    obj.console
        .write_line(format!("Data member set to {value} via friend function."));
}

pub fn increment_data_member(obj: &mut MyClass) {
    obj.data_member += 1;
    obj.console.write_line(format!(
        "Data member incremented to: {}",
        obj.get_data_member()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_method_prints_nothing() {
        let console = Console::capturing();
        let obj = MyClass::new(&console, 1, "a");
        console.take_lines();
        obj.empty_method();
        assert!(console.lines().is_empty());
    }

    #[test]
    fn create_object_ignores_own_fields() {
        let console = Console::capturing();
        let obj = MyClass::new(&console, 1, "a");
        let created = obj.create_object(9, "nine");
        assert_eq!(created.get_data_member(), 9);
        assert_eq!(created.get_non_primitive_data_member(), "nine");
        assert_eq!(obj.get_data_member(), 1);
    }

    #[test]
    fn friend_functions_reach_private_field() {
        let console = Console::capturing();
        let mut obj = MyClass::new(&console, 1, "a");
        console.take_lines();

        set_data_member_friend(&mut obj, 41);
        increment_data_member(&mut obj);
        assert_eq!(get_data_member_friend(&obj), 42);
        assert_eq!(
            console.lines(),
            [
                "Data member set to 41 via friend function.",
                "Data member incremented to: 42"
            ]
        );
    }

    #[test]
    fn setters_chain() {
        let console = Console::capturing();
        let mut obj = MyClass::new(&console, 0, "");
        obj.set_data_member(3)
            .set_other_data_member("chained".to_string());
        assert_eq!(obj.data_member(), 3);
        assert_eq!(obj.other_data_member(), "chained");
    }
}
