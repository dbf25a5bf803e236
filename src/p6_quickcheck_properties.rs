// Pattern 6: Property-Based Testing with QuickCheck
// The same passing-semantics properties in QuickCheck's return-a-bool style.

use quickcheck_macros::quickcheck;
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

#[quickcheck]
fn copy_argument_preserves_caller_field(v: i32) -> bool {
    let rec = ValueRecord { x: v };
    take_copy(rec);
    rec.x == v
}

#[quickcheck]
fn shared_argument_overwrites_caller_field(v: i32) -> bool {
    let rec = Rc::new(RefCell::new(SharedRecord { x: v }));
    take_handle(Rc::clone(&rec));
    let result = rec.borrow().x == 5;
    result
}

#[quickcheck]
fn shared_write_is_seen_by_every_alias(v: i32) -> bool {
    let rec = Rc::new(RefCell::new(SharedRecord { x: v }));
    let alias = Rc::clone(&rec);
    take_handle(Rc::clone(&rec));
    let result = alias.borrow().x == 5;
    result
}

fn main() {
    println!("QuickCheck passing-semantics properties - run with: cargo test");
    println!("QuickCheck's syntax is slightly different from proptest.");
}
