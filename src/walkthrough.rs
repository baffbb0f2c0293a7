use crate::another_class::AnotherClass;
use crate::console::Console;
use crate::external;
use crate::my_class::{self, MyClass};

/// Call every fixture operation once, in a fixed order, writing to `console`
pub fn run(console: &Console) {
    log::info!("starting walkthrough");

    external::external_function(console);
    external::another_external_function(console, "walkthrough");
    AnotherClass::new(console, 3).display();

    let mut subject = MyClass::new(console, 1, "walkthrough");
    {
        let copy = subject.clone();
        copy.display_non_data_member();
    }

    subject.empty_method();
    subject.display_non_data_member();
    subject.wrap_external_function();
    drop(subject.create_object(2, "created"));

    subject.change_attribute(4);
    subject.change_many_attributes(6, "changed");
    subject
        .set_data_member(4)
        .set_other_data_member("property".to_string());

    let mut accumulator = 10;
    subject.add_data_member(&mut accumulator);
    log::debug!(
        "data member {} (text {:?}), doubled {}, positive {}, accumulator {accumulator}",
        subject.get_data_member(),
        subject.get_non_primitive_data_member(),
        subject.double_data_member(),
        subject.is_data_member_positive(),
    );

    subject.call_on_local_object();
    subject.call_on_local_object_of_another_class();
    subject.do_local_computation();

    my_class::set_data_member_friend(&mut subject, 7);
    my_class::increment_data_member(&mut subject);
    log::debug!(
        "friend read {}",
        my_class::get_data_member_friend(&subject)
    );

    log::info!("walkthrough finished");
}
