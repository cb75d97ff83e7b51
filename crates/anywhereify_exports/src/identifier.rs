use std::sync::atomic::{AtomicUsize, Ordering};

use anywhereify_utils::{concat_string, ecmascript::is_safe_binding_name};
use rand::{distributions::Alphanumeric, Rng};
use rustc_hash::FxHashSet;

/// Produces candidate tokens for generated bindings.
///
/// The allocator strips everything but ASCII letters from a token, so sources
/// don't need to care about what is a legal identifier.
pub trait IdentifierSource: Send + Sync {
  fn next_token(&self) -> String;
}

/// Random alphanumeric tokens, as long as a nanoid.
#[derive(Debug, Clone)]
pub struct RandomIdentifierSource {
  len: usize,
}

impl RandomIdentifierSource {
  pub fn new(len: usize) -> Self {
    Self { len }
  }
}

impl Default for RandomIdentifierSource {
  fn default() -> Self {
    Self::new(21)
  }
}

impl IdentifierSource for RandomIdentifierSource {
  fn next_token(&self) -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(self.len).map(char::from).collect()
  }
}

/// `prefixA`, `prefixB`, ..., `prefixZ`, `prefixAA`, ... Deterministic, for tests and
/// reproducible builds.
#[derive(Debug)]
pub struct SequentialIdentifierSource {
  prefix: String,
  next: AtomicUsize,
}

impl SequentialIdentifierSource {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self { prefix: prefix.into(), next: AtomicUsize::new(0) }
  }
}

impl IdentifierSource for SequentialIdentifierSource {
  fn next_token(&self) -> String {
    let n = self.next.fetch_add(1, Ordering::Relaxed);
    concat_string!(self.prefix, alphabetic_suffix(n))
  }
}

/// Bijective base-26 over `A..=Z`.
fn alphabetic_suffix(mut n: usize) -> String {
  let mut letters = Vec::new();
  loop {
    letters.push(b'A' + u8::try_from(n % 26).unwrap_or_default());
    if n < 26 {
      break;
    }
    n = n / 26 - 1;
  }
  letters.iter().rev().map(|&b| char::from(b)).collect()
}

const MAX_ATTEMPTS: usize = 32;

/// Hands out identifiers that are unique within one compilation.
pub struct IdentifierAllocator<'a> {
  source: &'a dyn IdentifierSource,
  allocated: FxHashSet<String>,
}

impl<'a> IdentifierAllocator<'a> {
  pub fn new(source: &'a dyn IdentifierSource) -> Self {
    Self { source, allocated: FxHashSet::default() }
  }

  pub fn allocate(&mut self) -> String {
    for _ in 0..MAX_ATTEMPTS {
      let token: String =
        self.source.next_token().chars().filter(char::is_ascii_alphabetic).collect();
      if is_safe_binding_name(&token) && self.allocated.insert(token.clone()) {
        return token;
      }
    }

    log::debug!("Identifier source kept colliding, falling back to a counter-derived name");
    let mut n = self.allocated.len();
    loop {
      let candidate = concat_string!("anywhereify", alphabetic_suffix(n));
      if self.allocated.insert(candidate.clone()) {
        return candidate;
      }
      n += 1;
    }
  }
}
