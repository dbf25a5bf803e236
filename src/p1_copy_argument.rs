// Pattern 1: Copy Argument
// A Copy struct passed by value: the callee works on an independent copy,
// and nothing it does to that copy reaches the caller.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ValueRecord {
    x: i32,
}

fn store_five(mut rec: ValueRecord) {
    rec.x = 5;
    println!("inside store_five: rec.x = {}", rec.x);
} // rec is dropped here; the caller's record never sees the write

fn main() {
    let rec = ValueRecord { x: 1 };
    println!("before call: rec.x = {}", rec.x);

    store_five(rec); // copied, not moved: ValueRecord is Copy

    println!("after call: rec.x = {}", rec.x);

    println!("Copy argument example completed");
}
