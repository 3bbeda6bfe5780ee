//! Batch rendering and decoding
//!
//! A [`Walker`] keeps no per-walk state, so one walker can render many
//! independent values at once. With the `parallel` feature the batch runs on
//! the rayon thread pool; without it the same functions run sequentially.
//! Results always come back in input order.
//!
//! ```rust
//! use sajj::parallel::render_batch;
//! use sajj::{Stringifier, Value, WalkConfig};
//!
//! let walker = Stringifier::walker(WalkConfig::default()).unwrap();
//! let values = vec![Value::number(1.0), Value::string("two"), Value::Undefined];
//! let results = render_batch(&walker, &values);
//! assert_eq!(results[0].as_deref(), Ok("1"));
//! assert_eq!(results[1].as_deref(), Ok("\"two\""));
//! assert!(results[2].is_err());
//! ```

use crate::jhtml::{DecodeResult, Decoder};
use crate::markup::Element;
use crate::walk::{Handlers, Value, WalkConfig, WalkResult, Walker};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Render every value with one shared walker
///
/// # Arguments
/// * `walker` - The walker to share across the batch
/// * `values` - The values to render
///
/// # Returns
/// One result per value, in input order
#[cfg(feature = "rayon")]
pub fn render_batch<H: Handlers + Sync>(
    walker: &Walker<H>,
    values: &[Value],
) -> Vec<WalkResult<String>> {
    values.par_iter().map(|value| walker.walk(value)).collect()
}

/// Render every value with one shared walker (sequential fallback)
#[cfg(not(feature = "rayon"))]
pub fn render_batch<H: Handlers>(
    walker: &Walker<H>,
    values: &[Value],
) -> Vec<WalkResult<String>> {
    values.iter().map(|value| walker.walk(value)).collect()
}

/// Decode every JHTML root element under one configuration
#[cfg(feature = "rayon")]
pub fn decode_batch(elements: &[Element], config: &WalkConfig) -> Vec<DecodeResult<Value>> {
    let decoder = Decoder::new(config);
    elements
        .par_iter()
        .map(|element| decoder.decode(element))
        .collect()
}

/// Decode every JHTML root element under one configuration (sequential fallback)
#[cfg(not(feature = "rayon"))]
pub fn decode_batch(elements: &[Element], config: &WalkConfig) -> Vec<DecodeResult<Value>> {
    let decoder = Decoder::new(config);
    elements
        .iter()
        .map(|element| decoder.decode(element))
        .collect()
}
