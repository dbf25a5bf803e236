// Pattern 3: Copy vs Shared Side by Side
// One record is passed as a copy, the other through a shared handle. Both
// callees write 5 to a field that started at 1; only the shared write
// survives the call.

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
    assert_eq!(rec.x, 5); // the write lands, but only on the callee's copy
}

fn take_handle(rec: Rc<RefCell<SharedRecord>>) {
    rec.borrow_mut().x = 5;
}

fn main() {
    let a = ValueRecord { x: 1 };
    let b = Rc::new(RefCell::new(SharedRecord { x: 1 }));

    take_copy(a);
    take_handle(Rc::clone(&b));

    println!("a.x = {}", a.x);
    println!("b.x = {}", b.borrow().x);
}

#[cfg(test)]
mod tests {
    use super::*;

    mod copy_side {
        use super::*;

        #[test]
        fn caller_value_survives() {
            let a = ValueRecord { x: 1 };
            take_copy(a);
            assert_eq!(a.x, 1);
        }
    }

    mod shared_side {
        use super::*;

        #[test]
        fn caller_observes_the_write() {
            let b = Rc::new(RefCell::new(SharedRecord { x: 1 }));
            take_handle(Rc::clone(&b));
            assert_eq!(b.borrow().x, 5);
        }
    }

    #[test]
    fn report_lines_match() {
        let a = ValueRecord { x: 1 };
        let b = Rc::new(RefCell::new(SharedRecord { x: 1 }));
        take_copy(a);
        take_handle(Rc::clone(&b));
        assert_eq!(format!("a.x = {}", a.x), "a.x = 1");
        assert_eq!(format!("b.x = {}", b.borrow().x), "b.x = 5");
    }
}
