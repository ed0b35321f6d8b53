//! Regenerates `num-write/src/tables.rs`.
//!
//! Usage: `cargo run -p num-write-dev [-- <output path>]`

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use proc_macro2::{Literal, TokenStream};
use quote::quote;

const HEADER: &str = "// This file is generated by num-write-dev. Do not edit.\n";

const MAX_POW5: u32 = 13;
const MARGIN_BUCKETS: usize = 256;
const MARGIN_LEN: usize = MARGIN_BUCKETS + 2;

struct Table {
    doc: &'static str,
    tokens: TokenStream,
}

fn pow5() -> Table {
    let values = (0..=MAX_POW5).map(|i| Literal::u32_unsuffixed(5u32.pow(i)));
    let len = Literal::usize_unsuffixed(MAX_POW5 as usize + 1);
    Table {
        doc: "`5^0` through `5^13`, the largest power of five that fits in a `u32`.",
        tokens: quote! {
            pub(crate) const POW5: [u32; #len] = [#(#values),*];
        },
    }
}

fn max_pow5() -> Table {
    let max = Literal::u32_unsuffixed(MAX_POW5);
    Table {
        doc: "Largest exponent tabulated in `POW5`.",
        tokens: quote! {
            pub(crate) const MAX_POW5: u32 = #max;
        },
    }
}

/// Bucket `i` gets `floor(10^(k/256)) - 1` with `k = clamp(i - 1, 0, 255)`.
fn margin(i: usize) -> Result<u8> {
    let k = i.saturating_sub(1).min(MARGIN_BUCKETS - 1);
    let floor = 10f64.powf(k as f64 / MARGIN_BUCKETS as f64).floor();
    if !(1.0..10.0).contains(&floor) {
        bail!("margin bucket {} out of range: {}", i, floor);
    }
    Ok(floor as u8 - 1)
}

fn rounding_margin() -> Result<Table> {
    let values = (0..MARGIN_LEN)
        .map(|i| margin(i).map(Literal::u8_unsuffixed))
        .collect::<Result<Vec<_>>>()?;
    let len = Literal::usize_unsuffixed(MARGIN_LEN);
    Ok(Table {
        doc: "Rounding margin for the last extracted decimal digit, by bucket of the\n\
              fractional part of `(e - 1) / log2(10)`.\n\
              \n\
              Bucket `i` covers `[i/256, (i+1)/256)`. Entry `i` is `floor(10^(k/256)) - 1`\n\
              with `k = clamp(i - 1, 0, 255)`, a lower bound for `floor(10^frac) - 1` that\n\
              still holds when the bucket index is one too high.",
        tokens: quote! {
            pub(crate) const ROUNDING_MARGIN: [u8; #len] = [#(#values),*];
        },
    })
}

fn digit_table(name: &str, doc: &'static str, digit: fn(u8) -> u8) -> Result<Table> {
    let name: TokenStream = name.parse().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let values = (0..100u8)
        .map(|i| {
            format!("b'{}'", char::from(b'0' + digit(i)))
                .parse::<TokenStream>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Table {
        doc,
        tokens: quote! {
            pub(crate) const #name: [u8; 100] = [#(#values),*];
        },
    })
}

fn render(tables: &[Table]) -> Result<String> {
    let mut out = String::from(HEADER);
    for table in tables {
        out.push('\n');
        for line in table.doc.lines() {
            if line.is_empty() {
                out.push_str("///\n");
            } else {
                writeln!(out, "/// {}", line)?;
            }
        }
        writeln!(out, "{}", table.tokens)?;
    }
    Ok(out)
}

fn rustfmt(path: &Path) -> Result<()> {
    let status = Command::new("rustfmt")
        .arg("--edition=2021")
        .arg(path)
        .status()
        .context("failed to spawn rustfmt")?;
    if !status.success() {
        bail!("rustfmt exited with {}", status);
    }
    Ok(())
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("num-write/src/tables.rs"));

    let tables = vec![
        pow5(),
        max_pow5(),
        rounding_margin()?,
        digit_table("DIGIT_TENS", "ASCII tens digit of `0..=99`.", |i| i / 10)?,
        digit_table("DIGIT_ONES", "ASCII ones digit of `0..=99`.", |i| i % 10)?,
    ];

    let source = render(&tables)?;
    fs::write(&path, source).with_context(|| format!("failed to write {}", path.display()))?;
    rustfmt(&path)?;

    eprintln!("wrote {} tables to {}", tables.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_are_monotonic_and_bounded() {
        let margins = (0..MARGIN_LEN).map(margin).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(margins[0], 0);
        assert_eq!(margins[MARGIN_LEN - 1], 8);
        assert!(margins.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn margin_never_exceeds_bucket_floor() {
        for i in 0..MARGIN_BUCKETS {
            let lowest = 10f64.powf(i as f64 / MARGIN_BUCKETS as f64).floor() as u8;
            assert!(margin(i).unwrap() + 1 <= lowest, "bucket {}", i);
        }
    }

    #[test]
    fn rendered_source_has_every_table() {
        let tables = vec![pow5(), max_pow5(), rounding_margin().unwrap()];
        let source = render(&tables).unwrap();
        assert!(source.starts_with(HEADER));
        assert!(source.contains("POW5"));
        assert!(source.contains("MAX_POW5"));
        assert!(source.contains("ROUNDING_MARGIN"));
    }
}
