use super::source::Source;

/// Joins generated fragments with a newline, skipping empty ones.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn join(&self) -> String {
    let sources =
      self.inner.iter().map(|source| source.content()).filter(|content| !content.is_empty());

    let size_hint = sources.clone().map(|content| content.len() + 1).sum::<usize>();
    let mut ret_source = String::with_capacity(size_hint);

    for (index, content) in sources.enumerate() {
      if index > 0 {
        ret_source.push('\n');
      }
      ret_source.push_str(content);
    }

    ret_source
  }
}

#[test]
fn test_join() {
  let mut joiner = SourceJoiner::default();
  joiner.append_source("a");
  joiner.append_source("b");
  joiner.append_source(String::new());
  joiner.append_source(String::from("c"));
  assert_eq!(joiner.join(), "a\nb\nc");
}
