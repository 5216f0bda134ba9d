use lexi_core::dictionary::Script;

use crate::entry::ChineseEntry;

/// Entry positions sorted by one script's headword, ties kept in source order
pub(crate) struct ScriptIndex {
    script: Script,
    order: Vec<usize>,
}

impl ScriptIndex {
    pub(crate) fn build(entries: &[ChineseEntry], script: Script) -> Self {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        // Stable sort, so equal headwords stay in ascending position
        order.sort_by(|&a, &b| entries[a].form(script).cmp(entries[b].form(script)));
        Self { script, order }
    }

    fn lower_bound(&self, entries: &[ChineseEntry], text: &str) -> usize {
        self.order
            .partition_point(|&i| entries[i].form(self.script) < text)
    }

    /// Position of the earliest entry whose headword equals `text`
    pub(crate) fn first(&self, entries: &[ChineseEntry], text: &str) -> Option<usize> {
        let start = self.lower_bound(entries, text);
        self.order
            .get(start)
            .copied()
            .filter(|&i| entries[i].form(self.script) == text)
    }

    /// The `limit` earliest positions whose headword starts with `prefix`,
    /// ascending.
    ///
    /// The matching range is found by binary search. Only `limit` positions
    /// are sorted, but selecting them still touches every match.
    pub(crate) fn starting_with(
        &self,
        entries: &[ChineseEntry],
        prefix: &str,
        limit: usize,
    ) -> Vec<usize> {
        if limit == 0 {
            return Vec::new();
        }

        let start = self.lower_bound(entries, prefix);
        let len = self.order[start..]
            .partition_point(|&i| entries[i].form(self.script).starts_with(prefix));
        let mut positions = self.order[start..start + len].to_vec();
        if positions.len() > limit {
            positions.select_nth_unstable(limit - 1);
            positions.truncate(limit);
        }
        positions.sort_unstable();
        positions
    }
}
