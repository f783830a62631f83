// Collects every combination of `$product` through `get`, `for_each` and
// `iter`, as owned values.
#[macro_export]
macro_rules! collect_modes {
    ($product:expr) => {{
        let product = $product;

        let by_get: Vec<Vec<_>> = (0..product.len())
            .map(|index| product.get(index).unwrap().into_iter().cloned().collect())
            .collect();

        let mut by_for_each: Vec<Vec<_>> = Vec::new();
        product.for_each(|combination, index| {
            assert_eq!(index, by_for_each.len(), "for_each skipped an index");
            by_for_each.push(combination.iter().map(|&value| value.clone()).collect());
        });

        let by_iter: Vec<Vec<_>> = product
            .iter()
            .map(|combination| combination.into_iter().cloned().collect())
            .collect();

        [by_get, by_for_each, by_iter]
    }};
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // With attributes (including empty attribute list)
    ([$($attrs:meta)*] total, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_total() {
            let factors = factors();
            let product = odometer::CartesianProduct::new(&factors);

            pretty_assertions::assert_eq!(product.len(), $expected, "len()");
            pretty_assertions::assert_eq!(product.iter().count(), $expected, "iter().count()");

            let mut calls = 0;
            product.for_each(|_, _| calls += 1);
            pretty_assertions::assert_eq!(calls, $expected, "for_each calls");

            pretty_assertions::assert_eq!(product.get(product.len()), None, "get(len())");
            pretty_assertions::assert_eq!(product.get(-1), None, "get(-1)");
        }
    };

    ([$($attrs:meta)*] order, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_order() {
            let factors = factors();
            let product = odometer::CartesianProduct::new(&factors);

            let expected: Vec<Vec<Item>> = $expected
                .into_iter()
                .map(|combination| combination.into_iter().collect())
                .collect();

            let [by_get, by_for_each, by_iter] = collect_modes!(&product);
            pretty_assertions::assert_eq!(by_get, expected, "get");
            pretty_assertions::assert_eq!(by_for_each, expected, "for_each");
            pretty_assertions::assert_eq!(by_iter, expected, "iter");
        }
    };

    ([$($attrs:meta)*] reversed, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_reversed() {
            let factors = factors();
            let product = odometer::CartesianProduct::new(&factors);

            let expected: Vec<Vec<Item>> = $expected
                .into_iter()
                .map(|combination| combination.into_iter().collect())
                .collect();
            let result: Vec<Vec<Item>> = product
                .iter()
                .rev()
                .map(|combination| combination.into_iter().cloned().collect())
                .collect();

            pretty_assertions::assert_eq!(result, expected);
        }
    };

    ([$($attrs:meta)*] lookup, { $($key:literal => $outcome:pat),* $(,)? }) => {
        $(#[$attrs])*
        #[test]
        fn validate_lookup() {
            let factors = factors();
            let product = odometer::IndexedCartesianProduct::new(&factors);

            $(
                let outcome = product
                    .lookup($key)
                    .map(|combination| combination.into_iter().cloned().collect::<Vec<Item>>());
                match outcome.as_ref().map(|combination| combination.as_slice()) {
                    $outcome => {}
                    other => panic!(
                        "lookup({:?}): expected {} but got {:?}",
                        $key,
                        stringify!($outcome),
                        other
                    ),
                }
            )*
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, then the element type and the factors, then any
// order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        item: $item:ty,
        factors: $factors:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            type Item = $item;

            fn factors() -> Vec<Vec<Item>> {
                $factors
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
