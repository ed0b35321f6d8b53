use crate::bignum::BigScratch;
use crate::dtoa::extract_decimal_mantissa;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::cell::RefCell;

        thread_local! {
            // Const-initialized and without a destructor, so first use on a
            // thread neither allocates nor registers anything.
            static SCRATCH: RefCell<BigScratch> = const { RefCell::new(BigScratch::new()) };
        }

        /// Runs the extractor on this thread's scratch. Falls back to a stack
        /// scratch if the thread's one is borrowed or already torn down.
        pub(crate) fn extract_on_thread(mantissa: u64, binary_exponent: i32, decimal_exponent: i32) -> u64 {
            SCRATCH
                .try_with(|cell| match cell.try_borrow_mut() {
                    Ok(mut scratch) => {
                        extract_decimal_mantissa(&mut scratch, mantissa, binary_exponent, decimal_exponent)
                    }
                    Err(_) => extract_on_stack(mantissa, binary_exponent, decimal_exponent),
                })
                .unwrap_or_else(|_| extract_on_stack(mantissa, binary_exponent, decimal_exponent))
        }
    } else {
        pub(crate) fn extract_on_thread(mantissa: u64, binary_exponent: i32, decimal_exponent: i32) -> u64 {
            extract_on_stack(mantissa, binary_exponent, decimal_exponent)
        }
    }
}

#[inline(never)]
fn extract_on_stack(mantissa: u64, binary_exponent: i32, decimal_exponent: i32) -> u64 {
    let mut scratch = BigScratch::new();
    extract_decimal_mantissa(&mut scratch, mantissa, binary_exponent, decimal_exponent)
}
