use indexmap::IndexMap;

/// One bucket of the namespace tree, holding the nodes declared exactly at
/// this level plus nested buckets. Built transiently per render call.
#[derive(Debug)]
pub struct ModuleTree<'a, T> {
  /// Last path segment.
  pub name: String,
  /// Dotted path from the root.
  pub fullname: String,
  pub nodes: Vec<&'a T>,
  pub children: Vec<ModuleTree<'a, T>>,
}

/// Groups `(module path, node)` pairs into a nested tree by dotted path
/// segment. Sibling buckets and the nodes inside a bucket keep
/// first-discovery order, never alphabetical order, so repeated runs over
/// the same input produce the same tree.
pub fn build_module_tree<'a, T>(entries: impl IntoIterator<Item = (&'a str, &'a T)>) -> Vec<ModuleTree<'a, T>> {
  let segmented = entries
    .into_iter()
    .map(|(module, node)| (module.split('.').collect::<Vec<_>>(), node))
    .collect();
  build_level(segmented, "")
}

fn build_level<'a, T>(entries: Vec<(Vec<&'a str>, &'a T)>, prefix: &str) -> Vec<ModuleTree<'a, T>> {
  #[derive(Default)]
  struct Bucket<'a, T> {
    leaves: Vec<&'a T>,
    deeper: Vec<(Vec<&'a str>, &'a T)>,
  }

  let mut buckets: IndexMap<&str, Bucket<'a, T>> = IndexMap::new();
  for (segments, node) in entries {
    let Some((head, rest)) = segments.split_first() else {
      continue;
    };
    let bucket = buckets.entry(head).or_insert_with(|| Bucket {
      leaves: Vec::new(),
      deeper: Vec::new(),
    });
    if rest.is_empty() {
      bucket.leaves.push(node);
    } else {
      bucket.deeper.push((rest.to_vec(), node));
    }
  }

  buckets
    .into_iter()
    .map(|(segment, bucket)| {
      let fullname = if prefix.is_empty() {
        segment.to_string()
      } else {
        format!("{prefix}.{segment}")
      };
      ModuleTree {
        name: segment.to_string(),
        children: build_level(bucket.deeper, &fullname),
        nodes: bucket.leaves,
        fullname,
      }
    })
    .collect()
}
