// Argument-Passing Semantics Patterns Library
// This module re-exports the example modules for documentation purposes.

pub mod examples {
    // Pattern 1: Copy Argument
    // See p1_copy_argument.rs for:
    // - A Copy struct passed by value
    // - The callee's view of its local copy
    // - Why the caller's field is untouched after the call

    // Pattern 2: Shared Handle Argument
    // See p2_shared_argument.rs for:
    // - Rc<RefCell<_>> as shared mutable storage
    // - Cloning the handle at the call site, not the record
    // - Strong counts before, during, and after the call

    // Pattern 3: Copy vs Shared Side by Side
    // See p3_copy_vs_shared.rs for:
    // - Both callees writing 5 to a record that started at 1
    // - Only the shared write surviving the call

    // Pattern 4: Borrowed Argument
    // See p4_borrowed_argument.rs for:
    // - &mut as the native route for callee-mutates-caller
    // - The borrow ending at the call site

    // Pattern 5: Assignment Semantics
    // See p5_assignment_semantics.rs for:
    // - The same copy-vs-alias split at let bindings

    // Pattern 6: Property-Based Testing
    // See p6_proptest_properties.rs and p6_quickcheck_properties.rs for:
    // - Copy arguments never leaking writes, for every i32 field value
    // - Shared arguments always landing writes, for every i32 field value
}
