#![warn(missing_docs)]
//! xbench Workloads
//!
//! The fixed battery of synthetic workloads used for cross-language
//! comparison. Each body performs a fixed amount of work and returns a value
//! so the harness can keep the call alive. The bodies are payload; the
//! measurement protocol lives in `xbench-core`.

pub mod arithmetic;
pub mod calls;
pub mod containers;
pub mod keyvalue;
pub mod objects;
pub mod text;

pub use keyvalue::KvScanner;

use xbench_core::Workload;

/// The standard battery, in declared execution order
pub fn standard_workloads() -> Vec<Workload> {
    vec![
        Workload::new(
            "math",
            "Math Operations (100k)",
            arithmetic::MATH_ITERATIONS,
            arithmetic::bench_math,
        )
        .with_title("Math Operations"),
        Workload::new(
            "array",
            "Array Operations (10k append)",
            containers::ARRAY_LEN as u64,
            containers::bench_array,
        )
        .with_title("Array Operations"),
        Workload::new(
            "text",
            "Text Operations (1k)",
            text::TEXT_ITERATIONS as u64,
            text::bench_text,
        )
        .with_title("Text Operations"),
        Workload::new(
            "keyvalue",
            "Key-Value Access (10k)",
            keyvalue::KEYVALUE_ITERATIONS,
            keyvalue::bench_keyvalue,
        )
        .with_title("Key-Value Access"),
        Workload::new(
            "foreach",
            "Foreach Loop (10k)",
            containers::FOREACH_LEN as u64,
            containers::bench_foreach,
        )
        .with_title("Foreach Loop"),
        Workload::new(
            "foreach_functions",
            "Foreach + Functions (1k)",
            containers::FOREACH_FUNCTIONS_LEN as u64,
            containers::bench_foreach_functions,
        )
        .with_title("Foreach + Functions"),
        Workload::new(
            "calls",
            "Function Calls (100k)",
            calls::CALL_ITERATIONS,
            calls::bench_calls,
        ),
        Workload::new(
            "calls_args",
            "Function Calls with Args (100k)",
            calls::CALL_ITERATIONS,
            calls::bench_calls_with_args,
        ),
        Workload::new(
            "object_access",
            "Object Access (50k)",
            objects::OBJECT_ITERATIONS,
            objects::bench_object_access,
        )
        .with_title("Object Access"),
    ]
}
