// Pattern 6: Property-Based Testing of Passing Semantics
// proptest drives both mutators across the full i32 range of the field.

use proptest::prelude::*;
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

fn take_copy(mut rec: ValueRecord) {
    rec.x = 5;
    assert_eq!(rec.x, 5);
}

fn take_handle(rec: Rc<RefCell<SharedRecord>>) {
    rec.borrow_mut().x = 5;
}

// ============================================================================
// Example: Copy arguments never leak writes
// ============================================================================

proptest! {
    #[test]
    fn copy_argument_preserves_caller_field(v: i32) {
        let rec = ValueRecord { x: v };
        take_copy(rec);
        prop_assert_eq!(rec.x, v);
    }
}

// ============================================================================
// Example: Shared arguments always land writes
// ============================================================================

proptest! {
    #[test]
    fn shared_argument_overwrites_caller_field(v: i32) {
        let rec = Rc::new(RefCell::new(SharedRecord { x: v }));
        take_handle(Rc::clone(&rec));
        prop_assert_eq!(rec.borrow().x, 5);
    }

    #[test]
    fn shared_argument_releases_its_handle(v: i32) {
        let rec = Rc::new(RefCell::new(SharedRecord { x: v }));
        take_handle(Rc::clone(&rec));
        prop_assert_eq!(Rc::strong_count(&rec), 1);
    }
}

fn main() {
    println!("Passing-semantics properties - run with: cargo test");
    println!("proptest generates hundreds of field values and shrinks failures.");
}
