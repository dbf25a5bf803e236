//! Pattern 4: Borrowed Argument
//! Example: `&mut` as the native route for a callee that mutates caller state
//!
//! Run with: cargo run --bin p4_borrowed_argument

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    x: i32,
}

// The caller lends the record; no copy, no shared ownership
fn store_five(rec: &mut Record) {
    rec.x = 5;
}

fn main() {
    let mut rec = Record { x: 1 };
    println!("before call: rec.x = {}", rec.x);

    store_five(&mut rec);

    println!("after call: rec.x = {}", rec.x);

    // The exclusive borrow ended at the call, so the record is free to copy
    let snapshot = rec;
    assert_eq!(snapshot.x, 5);

    println!("Borrowed argument example completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_write_reaches_caller() {
        let mut rec = Record { x: 1 };
        store_five(&mut rec);
        assert_eq!(rec.x, 5);
    }

    #[test]
    fn snapshot_taken_before_the_call_is_a_copy() {
        let mut rec = Record { x: 1 };
        let snapshot = rec;
        store_five(&mut rec);
        assert_eq!(snapshot.x, 1);
        assert_eq!(rec.x, 5);
    }
}
