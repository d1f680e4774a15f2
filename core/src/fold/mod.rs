//! Left-fold over slices and the operations expressed through it.
//!
//! Everything here is built on [`reduce`]. The `make_*_function` helpers are
//! higher-order functions: they take a predicate or transform and return a
//! reducer that can be handed to `reduce` (or to the derived traversal of the
//! same name, which just picks the right initial accumulator).
//!
//! ```
//! use refold_core::fold::{filter, make_filter_function, make_map_function, map};
//!
//! let evens = filter(&[1, 2, 3, 4], make_filter_function(|n: &i32| n % 2 == 0));
//! assert_eq!(evens, vec![2, 4]);
//!
//! let doubled = map(&[1, 2, 3], make_map_function(|n: &i32| n * 2));
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

mod derived;
mod fallible;
mod reduce;
mod reducers;

pub use derived::{
    array_product, array_sum, bool_any, concat, filter, find, find_index, flat_map, map,
};
pub use fallible::{
    make_try_any_function, make_try_filter_function, make_try_find_function,
    make_try_find_index_function, make_try_flat_map_function, make_try_map_function,
    try_reduce, try_reduce1,
};
pub use reduce::{NOT_FOUND, reduce, reduce1};
pub use reducers::{
    any_defined, concat_all, make_any_function, make_filter_function, make_find_function,
    make_find_index_function, make_flat_map_function, make_map_function, product, sum,
};

#[cfg(test)]
#[path = "fold_test.rs"]
mod fold_test;
