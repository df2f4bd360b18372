/// IgnoreFileParser service - splits a suppression file into raw line groups
///
/// Consecutive identical lines are collapsed first, then the remaining lines
/// are split on blank lines. Groups are produced lazily from the parsed
/// lines, so the same `IgnoreGroups` can be iterated any number of times with
/// identical results.
pub struct IgnoreFileParser;

impl IgnoreFileParser {
    pub fn parse(content: &str) -> IgnoreGroups {
        let mut lines: Vec<String> = content
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        lines.dedup();
        IgnoreGroups { lines }
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parsed suppression file, ready to be grouped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreGroups {
    lines: Vec<String>,
}

impl IgnoreGroups {
    pub fn iter(&self) -> Groups<'_> {
        Groups {
            remaining: &self.lines,
        }
    }
}

impl<'a> IntoIterator for &'a IgnoreGroups {
    type Item = &'a [String];
    type IntoIter = Groups<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the non-empty line groups of an ignore file
#[derive(Debug, Clone)]
pub struct Groups<'a> {
    remaining: &'a [String],
}

impl<'a> Iterator for Groups<'a> {
    type Item = &'a [String];

    fn next(&mut self) -> Option<Self::Item> {
        let Some(start) = self.remaining.iter().position(|line| !is_blank(line)) else {
            self.remaining = &[];
            return None;
        };

        let rest = &self.remaining[start..];
        let end = rest
            .iter()
            .position(|line| is_blank(line))
            .unwrap_or(rest.len());
        let (group, tail) = rest.split_at(end);
        self.remaining = tail;
        Some(group)
    }
}
