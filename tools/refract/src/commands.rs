//! `refract` subcommands.
//!
//! Each command returns its output text so the binary only decides where
//! to print and which exit code to use.

use refract_desc::{decode, name_to_desc, parse, DescError};
use refract_host::ClassPool;
use refract_reflect::{EmptyValueSynthesizer, ReflectError, SynthesisConfig};

/// `refract desc <human-name>`: the descriptor of a type name.
pub fn desc(name: &str) -> Result<String, DescError> {
    name_to_desc(name)
}

/// `refract name <descriptor>`: the human name of a descriptor.
pub fn name(descriptor: &str) -> Result<String, DescError> {
    decode(descriptor)
}

/// `refract check <descriptor>`: `Ok(())` when the descriptor is well formed.
pub fn check(descriptor: &str) -> Result<(), DescError> {
    parse(descriptor).map(|_| ())
}

/// `refract empty <human-name>`: the empty value of a platform type.
pub fn empty(name: &str, max_depth: Option<usize>) -> Result<String, ReflectError> {
    let mut config = SynthesisConfig::default();
    if let Some(depth) = max_depth {
        config = config.with_max_depth(depth);
    }
    let synth = EmptyValueSynthesizer::new(ClassPool::with_platform().into_shared(), config);
    let result = synth.synthesize_named(name)?;
    tracing::debug!(objects = result.heap.len(), "synthesized");
    Ok(result.render())
}

#[cfg(test)]
mod tests;
