// Pattern 5: Assignment Semantics
// The same copy-vs-alias split, at a let binding instead of a call boundary.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ValueRecord {
    x: i32,
}

#[derive(Debug)]
struct SharedRecord {
    x: i32,
}

fn value_assignment() {
    let a = ValueRecord { x: 1 };
    let mut a2 = a; // a full copy of the record

    a2.x = 5;
    println!("a.x = {}, a2.x = {}", a.x, a2.x); // 1 and 5
}

fn handle_assignment() {
    let b = Rc::new(RefCell::new(SharedRecord { x: 1 }));
    let b2 = Rc::clone(&b); // a second handle to the same record

    b2.borrow_mut().x = 5;
    println!("b.x = {}, b2.x = {}", b.borrow().x, b2.borrow().x); // 5 and 5
}

fn main() {
    value_assignment();
    handle_assignment();
    println!("Assignment semantics example completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigned_copy_is_independent() {
        let a = ValueRecord { x: 1 };
        let mut a2 = a;
        a2.x = 5;
        assert_eq!(a.x, 1);
    }

    #[test]
    fn assigned_handle_aliases_the_record() {
        let b = Rc::new(RefCell::new(SharedRecord { x: 1 }));
        let b2 = Rc::clone(&b);
        b2.borrow_mut().x = 5;
        assert_eq!(b.borrow().x, 5);
        assert_eq!(Rc::strong_count(&b), 2);
    }
}
