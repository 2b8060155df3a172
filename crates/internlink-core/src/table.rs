use std::cmp::Ordering;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending
}

impl SortDirection {
  /// Only `asc` sorts ascending; any other
  /// token sorts descending.
  pub fn parse(token: &str) -> Self {
    if token.trim() == "asc" {
      Self::Ascending
    } else {
      Self::Descending
    }
  }

  fn apply(
    self,
    ordering: Ordering
  ) -> Ordering {
    match self {
      | Self::Ascending => ordering,
      | Self::Descending => {
        ordering.reverse()
      }
    }
  }
}

/// Stable sort of `rows` by the trimmed
/// text `cell_text` returns for each row,
/// using [`text_order`].
pub fn sort_rows<R, F>(
  rows: &mut [R],
  direction: SortDirection,
  cell_text: F
) where
  F: Fn(&R) -> String
{
  sort_rows_by(
    rows, direction, cell_text, text_order
  );
}

/// Like [`sort_rows`] with the text
/// comparison supplied by the caller, e.g.
/// the browser's `localeCompare`.
pub fn sort_rows_by<R, F, C>(
  rows: &mut [R],
  direction: SortDirection,
  cell_text: F,
  compare: C
) where
  F: Fn(&R) -> String,
  C: Fn(&str, &str) -> Ordering
{
  let mut keyed: Vec<(String, usize)> =
    rows
      .iter()
      .enumerate()
      .map(|(index, row)| {
        (
          cell_text(row).trim().to_string(),
          index
        )
      })
      .collect();

  keyed.sort_by(|(a, _), (b, _)| {
    direction.apply(compare(a, b))
  });

  let order: Vec<usize> = keyed
    .into_iter()
    .map(|(_, index)| index)
    .collect();
  apply_permutation(rows, order);
}

/// Dictionary order close to a root-locale
/// collation: letters first ignoring accents
/// and case, then accents, then lowercase
/// before uppercase.
pub fn text_order(
  a: &str,
  b: &str
) -> Ordering {
  let base = |text: &str| {
    deunicode::deunicode(text).to_lowercase()
  };
  let case_marks = |text: &str| {
    text
      .chars()
      .map(char::is_uppercase)
      .collect::<Vec<_>>()
  };

  base(a)
    .cmp(&base(b))
    .then_with(|| {
      a.to_lowercase().cmp(&b.to_lowercase())
    })
    .then_with(|| {
      case_marks(a).cmp(&case_marks(b))
    })
}

// `order[i]` is the original index of the
// row that belongs at position `i`.
fn apply_permutation<R>(
  rows: &mut [R],
  mut order: Vec<usize>
) {
  for start in 0..order.len() {
    let mut current = start;
    loop {
      let source = order[current];
      order[current] = current;
      if source == start {
        break;
      }
      rows.swap(current, source);
      current = source;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sorted(
    values: &[&str],
    direction: SortDirection
  ) -> Vec<String> {
    let mut rows: Vec<String> = values
      .iter()
      .map(|v| v.to_string())
      .collect();
    sort_rows(
      &mut rows,
      direction,
      String::clone
    );
    rows
      .iter()
      .map(|row| row.trim().to_string())
      .collect()
  }

  #[test]
  fn ascending_and_descending() {
    assert_eq!(
      sorted(
        &["b", "a", "c"],
        SortDirection::Ascending
      ),
      vec!["a", "b", "c"]
    );
    assert_eq!(
      sorted(
        &["b", "a", "c"],
        SortDirection::Descending
      ),
      vec!["c", "b", "a"]
    );
  }

  #[test]
  fn compares_trimmed_text() {
    assert_eq!(
      sorted(
        &["  zeta", "alpha  ", " mid "],
        SortDirection::Ascending
      ),
      vec!["alpha", "mid", "zeta"]
    );
  }

  #[test]
  fn equal_keys_keep_their_order() {
    let mut rows = vec![
      ("b", 1),
      ("a", 2),
      ("b", 3),
      ("a", 4)
    ];
    sort_rows(
      &mut rows,
      SortDirection::Ascending,
      |row| row.0.to_string()
    );
    assert_eq!(
      rows,
      vec![
        ("a", 2),
        ("a", 4),
        ("b", 1),
        ("b", 3)
      ]
    );
  }

  #[test]
  fn names_sort_like_a_dictionary() {
    assert_eq!(
      sorted(
        &["alice", "Bob", "Émile", "zed"],
        SortDirection::Ascending
      ),
      vec!["alice", "Bob", "Émile", "zed"]
    );
    assert_eq!(
      sorted(
        &["zed", "Émile", "alice", "Bob"],
        SortDirection::Descending
      ),
      vec!["zed", "Émile", "Bob", "alice"]
    );
  }

  #[test]
  fn accents_then_case_break_ties() {
    assert_eq!(
      text_order("e", "é"),
      Ordering::Less
    );
    assert_eq!(
      text_order("a", "A"),
      Ordering::Less
    );
    assert_eq!(
      text_order("Bob", "bob"),
      Ordering::Greater
    );
  }

  #[test]
  fn caller_comparison_is_used() {
    let mut rows =
      vec!["10", "9", "100"];
    sort_rows_by(
      &mut rows,
      SortDirection::Ascending,
      |row| row.to_string(),
      |a, b| {
        a.len().cmp(&b.len()).then(a.cmp(b))
      }
    );
    assert_eq!(rows, vec!["9", "10", "100"]);
  }

  #[test]
  fn unknown_direction_sorts_descending()
  {
    assert_eq!(
      SortDirection::parse("asc"),
      SortDirection::Ascending
    );
    assert_eq!(
      SortDirection::parse("desc"),
      SortDirection::Descending
    );
    assert_eq!(
      SortDirection::parse("sideways"),
      SortDirection::Descending
    );
  }
}
