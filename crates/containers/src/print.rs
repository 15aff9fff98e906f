//! Box-drawing debug dumps.

/// Renders one child subtree given the indentation its lines must carry.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Containers that can render themselves as an indented tree.
pub trait Printable {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;

    fn dump(&self) -> String {
        self.to_string_with_tab(None)
    }
}

/// Joins child renderings under a parent line.
///
/// `None` entries are skipped; the last present child gets the `└─` branch.
pub fn print_tree(tab: Option<&str>, children: &[Option<&PrintChild>]) -> String {
    let tab = tab.unwrap_or("");
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_fn) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = child_fn else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}
