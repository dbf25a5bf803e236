// Pattern 2: Shared Handle Argument
// An Rc<RefCell<_>> handle passed by value: the handle is copied at the call
// boundary, but both handles point at the same record, so the callee's write
// is the caller's write.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct SharedRecord {
    x: i32,
}

fn store_five(rec: Rc<RefCell<SharedRecord>>) {
    println!("inside store_five: {} handles alive", Rc::strong_count(&rec));
    rec.borrow_mut().x = 5;
} // only the handle is dropped here; the record lives on in the caller

fn main() {
    let rec = Rc::new(RefCell::new(SharedRecord { x: 1 }));
    println!("before call: rec.x = {}", rec.borrow().x);

    store_five(Rc::clone(&rec)); // clones the handle, not the record

    println!("after call: rec.x = {}", rec.borrow().x);
    println!("{} handle alive again", Rc::strong_count(&rec));

    println!("Shared handle example completed");
}
