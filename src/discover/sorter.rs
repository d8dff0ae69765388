use std::path::Path;

/// Count the path separators in `path` as written.
///
/// `./` and `../` segments are not normalized; `a/./b` has depth 2.
pub fn path_depth<P: AsRef<Path>>(path: P) -> usize {
	path.as_ref()
		.to_string_lossy()
		.chars()
		.filter(|c| std::path::is_separator(*c))
		.count()
}

/// Order paths by ascending depth, so ancestor fragments come first.
///
/// The sort is stable: paths of equal depth keep their discovery order.
pub fn sort_by_depth<P: AsRef<Path>>(mut paths: Vec<P>) -> Vec<P> {
	paths.sort_by_key(|p| path_depth(p));
	paths
}
