//! The closed set of supported templates.
//!
//! `TemplateKind` is the single source of truth for the registry: the
//! display name, template file name, and description of each kind live in
//! exhaustive `match` arms, so adding a variant without extending every
//! table is a compile error. [`TemplateKind::ALL`] fixes the enumeration
//! order used by both listing and resolution.

use std::path::{Path, PathBuf};

/// A supported template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// C source-file skeleton.
    C,
    /// Makefile skeleton.
    Makefile,
    /// Gnuplot surface-plot script skeleton.
    GnuplotSplot,
}

impl TemplateKind {
    /// All kinds, in declaration order. Listing output follows this order.
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::C,
        TemplateKind::Makefile,
        TemplateKind::GnuplotSplot,
    ];

    /// The kind used when no `-t` flag is given.
    pub const DEFAULT: TemplateKind = TemplateKind::C;

    /// Canonical name as typed on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::C => "c",
            TemplateKind::Makefile => "makefile",
            TemplateKind::GnuplotSplot => "gnuplot-splot",
        }
    }

    /// File name of the template under the template root.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::C => "c.template",
            TemplateKind::Makefile => "Makefile.template",
            TemplateKind::GnuplotSplot => "gnuplot-splot.sh.template",
        }
    }

    /// Short human-readable description, shown by `templates --json`.
    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::C => "C source file with an empty main",
            TemplateKind::Makefile => "Makefile for a single C target",
            TemplateKind::GnuplotSplot => "Shell script driving a gnuplot splot",
        }
    }

    /// Resolve a user-typed name to a kind.
    ///
    /// Matching is exact string equality against the canonical names.
    /// Earlier generations of this tool matched by prefix, which let a
    /// name like `ccc` resolve to `c`; that behavior is gone.
    pub fn resolve(name: &str) -> Option<TemplateKind> {
        TemplateKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Join the template root with a kind's file name. Pure, no I/O.
pub fn template_path(kind: TemplateKind, root: &Path) -> PathBuf {
    root.join(kind.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_exact_names() {
        assert_eq!(TemplateKind::resolve("c"), Some(TemplateKind::C));
        assert_eq!(
            TemplateKind::resolve("makefile"),
            Some(TemplateKind::Makefile)
        );
        assert_eq!(
            TemplateKind::resolve("gnuplot-splot"),
            Some(TemplateKind::GnuplotSplot)
        );
    }

    #[test]
    fn resolve_rejects_prefixes_and_extensions() {
        // "c2" and "ccc" must not resolve to "c"
        assert_eq!(TemplateKind::resolve("c2"), None);
        assert_eq!(TemplateKind::resolve("ccc"), None);
        assert_eq!(TemplateKind::resolve("make"), None);
        assert_eq!(TemplateKind::resolve("makefiles"), None);
    }

    #[test]
    fn resolve_rejects_empty_and_case_variants() {
        assert_eq!(TemplateKind::resolve(""), None);
        assert_eq!(TemplateKind::resolve("C"), None);
        assert_eq!(TemplateKind::resolve("Makefile"), None);
    }

    #[test]
    fn all_is_in_declaration_order() {
        let names: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["c", "makefile", "gnuplot-splot"]);
    }

    #[test]
    fn every_kind_resolves_by_its_own_name() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::resolve(kind.name()), Some(kind));
        }
    }

    #[test]
    fn default_kind_is_c() {
        assert_eq!(TemplateKind::DEFAULT, TemplateKind::C);
    }

    #[test]
    fn template_path_joins_root_and_file_name() {
        let path = template_path(TemplateKind::Makefile, Path::new("/tmp/root"));
        assert_eq!(path, PathBuf::from("/tmp/root/Makefile.template"));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(TemplateKind::GnuplotSplot.to_string(), "gnuplot-splot");
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TemplateKind::ALL.len());
    }
}
