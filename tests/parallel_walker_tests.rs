// tests/parallel_walker_tests.rs
use tensor_byteswap::*;

fn large_library(functions: usize, nodes_per_function: usize) -> FunctionLibrary {
    let mut library = FunctionLibrary::new();
    for f in 0..functions {
        let mut function = FunctionDef::new(format!("fn_{}", f));
        for n in 0..nodes_per_function {
            let values: Vec<i32> = (0..16).map(|v| (f * 1000 + n * 16 + v) as i32).collect();
            let tensor = TensorBuffer::from_values(ElementType::Int32, [4, 4], &values, Endianness::Big).unwrap();
            function.push(NodeRecord::constant(format!("const_{}", n), tensor));
            function.push(NodeRecord::new(format!("op_{}", n), "Relu").with_input(format!("const_{}", n)));
        }
        library.push(function);
    }
    library
}

#[test]
fn test_parallel_matches_sequential() {
    let mut sequential = large_library(32, 8);
    let mut parallel = sequential.clone();

    let expected = swap_library(&mut sequential, Endianness::Big, Endianness::Little).unwrap();
    let report = ParallelWalker::with_config(
        Endianness::Big,
        Endianness::Little,
        WalkerConfig::new().worker_threads(4),
    )
    .swap_library(&mut parallel)
    .unwrap();

    assert_eq!(report, expected);
    assert_eq!(report.buffers_swapped, 32 * 8);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_parallel_values_decode() {
    let mut library = large_library(4, 2);
    ParallelWalker::new(Endianness::Big, Endianness::Little)
        .swap_library(&mut library)
        .unwrap();

    let tensor = library.functions[3].node("const_1").and_then(|n| n.tensor_attr("value")).unwrap();
    let expected: Vec<i32> = (0..16).map(|v| 3016 + v).collect();
    assert_eq!(tensor.read_i32s(Endianness::Little).unwrap(), expected);
}

#[test]
fn test_more_threads_than_functions() {
    let mut library = large_library(2, 1);
    let report = ParallelWalker::with_config(
        Endianness::Little,
        Endianness::Big,
        WalkerConfig::new().worker_threads(64),
    )
    .swap_library(&mut library)
    .unwrap();
    assert_eq!(report.functions_visited, 2);
}

#[test]
fn test_parallel_error_names_record() {
    let mut library = large_library(6, 1);
    library.functions[4].push(NodeRecord::constant(
        "odd",
        TensorBuffer::new(ElementType::UInt16, [2], &[1, 2, 3]),
    ));

    let err = ParallelWalker::with_config(
        Endianness::Big,
        Endianness::Little,
        WalkerConfig::new().worker_threads(3),
    )
    .swap_library(&mut library)
    .unwrap_err();

    assert_eq!(err.record(), Some("fn_4/odd"));
}

#[test]
fn test_empty_library() {
    let mut library = FunctionLibrary::new();
    let report = ParallelWalker::new(Endianness::Big, Endianness::Little)
        .swap_library(&mut library)
        .unwrap();
    assert_eq!(report, SwapReport::default());
}

#[test]
fn test_parallel_error_matches_sequential_error() {
    let mut library = large_library(64, 1);
    for f in [21, 20] {
        library.functions[f].push(NodeRecord::constant(
            "bad",
            TensorBuffer::new(ElementType::Float, [3], &[0u8; 10]),
        ));
    }

    let expected = swap_library(&mut library.clone(), Endianness::Big, Endianness::Little).unwrap_err();
    assert_eq!(expected.record(), Some("fn_20/bad"));

    let walker = ParallelWalker::with_config(
        Endianness::Big,
        Endianness::Little,
        WalkerConfig::new().worker_threads(16),
    );
    for _ in 0..200 {
        let err = walker.swap_library(&mut library.clone()).unwrap_err();
        assert_eq!(err.record(), expected.record());
    }
}
