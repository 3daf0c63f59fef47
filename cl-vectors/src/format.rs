//! The line format shared with every consumer of the vectors:
//!
//! ```text
//! [inp1:inp2:...:inpn]|out|<+|->
//! ```
//!
//! Integers are written in decimal, forms as `(a, b, c)`.

use std::{ fmt, str::FromStr };

use anyhow::{ Context, bail, ensure };
use classgroup::TrForm;
use rug::Integer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorValue<F> {
    Int(Integer),
    Elem(F),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorRecord<F> {
    pub inputs: Vec<VectorValue<F>>,
    pub output: VectorValue<F>,
    pub truth: bool,
}

impl<F> VectorRecord<F> {
    pub fn new(inputs: Vec<VectorValue<F>>, output: VectorValue<F>, truth: bool) -> Self {
        VectorRecord { inputs, output, truth }
    }
}

impl<F: fmt::Display> fmt::Display for VectorValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorValue::Int(x) => write!(f, "{x}"),
            VectorValue::Elem(e) => write!(f, "{e}"),
        }
    }
}

impl<F: fmt::Display> fmt::Display for VectorRecord<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, inp) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{inp}")?;
        }
        let verdict = if self.truth { "+" } else { "-" };
        write!(f, "]|{}|{}", self.output, verdict)
    }
}

impl<F: TrForm> FromStr for VectorValue<F> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('(') {
            Ok(VectorValue::Elem(F::from_str(s)?))
        } else {
            let x = Integer::from_str(s).with_context(|| format!("invalid integer `{s}`"))?;
            Ok(VectorValue::Int(x))
        }
    }
}

impl<F: TrForm> FromStr for VectorRecord<F> {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split('|').collect();
        ensure!(fields.len() == 3, "expected 3 `|`-separated fields in `{line}`");
        let (inputs, output, verdict) = (fields[0], fields[1], fields[2]);

        let inputs = inputs
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .with_context(|| format!("inputs are not bracketed in `{line}`"))?;
        let inputs = if inputs.is_empty() {
            Vec::new()
        } else {
            inputs
                .split(':')
                .map(VectorValue::<F>::from_str)
                .collect::<anyhow::Result<Vec<_>>>()?
        };
        let output = VectorValue::<F>::from_str(output)?;
        let truth = match verdict {
            "+" => true,
            "-" => false,
            _ => bail!("verdict must be `+` or `-`, got `{verdict}`"),
        };
        Ok(VectorRecord { inputs, output, truth })
    }
}
