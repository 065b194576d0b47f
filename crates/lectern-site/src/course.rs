//! A course: one page registry served under one URL root.

use std::path::{Path, PathBuf};

use lectern_config::CourseConfig;
use lectern_registry::PageRegistry;

use crate::error::SiteError;
use crate::page::{
    CourseIndex, CrossLink, IndexEntry, PageContext, PageMetadata, SiteInfo, join_url,
};

/// Course with its immutable page registry.
///
/// All methods are reads against the registry built at construction, so a
/// `Course` can be shared by any number of rendering workers.
#[derive(Debug)]
pub struct Course {
    name: String,
    root_path: String,
    index_title: String,
    content_dir: PathBuf,
    info: SiteInfo,
    registry: PageRegistry,
}

impl Course {
    /// Create a course from its configuration and an already built registry.
    #[must_use]
    pub fn new(config: &CourseConfig, registry: PageRegistry, info: SiteInfo) -> Self {
        Self {
            name: config.name.clone(),
            root_path: config.root_path.clone(),
            index_title: config.index_title.clone(),
            content_dir: config.content_dir.clone(),
            info,
            registry,
        }
    }

    /// Load a course by reading its sources file.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Registry`] if the sources file cannot be read or
    /// is malformed.
    pub fn load(config: &CourseConfig, info: SiteInfo) -> Result<Self, SiteError> {
        let registry =
            PageRegistry::from_file(&config.sources_path).map_err(|source| SiteError::Registry {
                course: config.name.clone(),
                source,
            })?;
        tracing::debug!(course = %config.name, pages = registry.len(), "Course loaded");
        Ok(Self::new(config, registry, info))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL path of the course's lecture-notes root.
    #[must_use]
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Title of the course index page.
    #[must_use]
    pub fn index_title(&self) -> &str {
        &self.index_title
    }

    #[must_use]
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    #[must_use]
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Identity for the page with this path name, rooted at the course.
    ///
    /// Does not check registration; [`Course::page_metadata`] does.
    #[must_use]
    pub fn page_context(&self, path_name: &str) -> PageContext {
        PageContext::new(path_name, self.root_path.clone())
    }

    /// Metadata for the page being rendered.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Lookup`] if the page's own path name is not
    /// registered.
    pub fn page_metadata(&self, ctx: &PageContext) -> Result<PageMetadata, SiteError> {
        let entry = self
            .registry
            .resolve_by_path(&ctx.path_name)
            .map_err(|e| SiteError::lookup(&self.name, e))?;
        Ok(PageMetadata {
            title: entry.page_title.clone(),
            info: self.info.clone(),
        })
    }

    /// Link to a page of this course by named identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Lookup`] if no page has this identifier.
    pub fn link_to(&self, named_identifier: &str) -> Result<CrossLink, SiteError> {
        self.resolve_link(&self.root_path, named_identifier)
    }

    /// Link from the page in `ctx` to a sibling page by named identifier.
    ///
    /// The href is built against the context's parent path.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Lookup`] if no page has this identifier.
    pub fn link_from(
        &self,
        ctx: &PageContext,
        named_identifier: &str,
    ) -> Result<CrossLink, SiteError> {
        self.resolve_link(&ctx.parent_path, named_identifier)
    }

    fn resolve_link(
        &self,
        parent_path: &str,
        named_identifier: &str,
    ) -> Result<CrossLink, SiteError> {
        let target = self
            .registry
            .resolve_by_identifier(named_identifier)
            .map_err(|e| SiteError::lookup(&self.name, e))?;
        Ok(CrossLink {
            href: join_url(parent_path, &target.path_name),
            text: target.page_title.clone(),
        })
    }

    /// Resolve every identifier, collecting all misses instead of stopping
    /// at the first.
    ///
    /// # Errors
    ///
    /// Returns every [`SiteError::Lookup`] encountered, in input order.
    pub fn check_links<'a, I>(&self, identifiers: I) -> Result<Vec<CrossLink>, Vec<SiteError>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut links = Vec::new();
        let mut errors = Vec::new();
        for identifier in identifiers {
            match self.link_to(identifier) {
                Ok(link) => links.push(link),
                Err(e) => errors.push(e),
            }
        }
        if errors.is_empty() {
            Ok(links)
        } else {
            Err(errors)
        }
    }

    /// Index page listing every page in source order.
    ///
    /// Titles are resolved by path name, so a repeated path name lists the
    /// winning title at each of its positions.
    #[must_use]
    pub fn index(&self) -> CourseIndex {
        let entries = self
            .registry
            .pages()
            .iter()
            .map(|page| {
                let title = self
                    .registry
                    .resolve_by_path(&page.path_name)
                    .map_or_else(|_| page.page_title.clone(), |e| e.page_title.clone());
                IndexEntry {
                    href: join_url(&self.root_path, &page.path_name),
                    title,
                }
            })
            .collect();

        CourseIndex {
            metadata: PageMetadata {
                title: self.index_title.clone(),
                info: self.info.clone(),
            },
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::Course: Send, Sync);

    use pretty_assertions::assert_eq;

    use lectern_registry::PageDescriptor;

    use super::*;

    fn course_config(name: &str, root_path: &str) -> CourseConfig {
        CourseConfig {
            name: name.to_owned(),
            root_path: root_path.to_owned(),
            content_dir: PathBuf::from("/content").join(name),
            sources_path: PathBuf::from("/content").join(name).join("sources.yaml"),
            index_title: "CS 162 Lecture Notes".to_owned(),
        }
    }

    fn cs162() -> Course {
        let registry = PageRegistry::new(vec![
            PageDescriptor::new("encapsulation", "Encapsulation", "encapsulation"),
            PageDescriptor::new("inheritance", "Inheritance", "inheritance"),
            PageDescriptor::new("polymorphism", "Polymorphism", "polymorphism"),
            PageDescriptor::new("references", "References and Copies", "references-and-copies"),
        ])
        .unwrap();
        let info = SiteInfo {
            author: Some("Alex Guyer".to_owned()),
            email: Some("guyera@oregonstate.edu".to_owned()),
        };
        Course::new(&course_config("cs-162", "/cs-162/lecture-notes"), registry, info)
    }

    #[test]
    fn test_page_metadata_uses_own_title() {
        let course = cs162();
        let ctx = course.page_context("polymorphism");

        let meta = course.page_metadata(&ctx).unwrap();
        assert_eq!(meta.title, "Polymorphism");
        assert_eq!(meta.info.author.as_deref(), Some("Alex Guyer"));
    }

    #[test]
    fn test_accessors() {
        let course = cs162();
        assert_eq!(course.name(), "cs-162");
        assert_eq!(course.root_path(), "/cs-162/lecture-notes");
        assert_eq!(course.index_title(), "CS 162 Lecture Notes");
        assert_eq!(course.index_title(), course.index().metadata.title);
    }

    #[test]
    fn test_page_metadata_unregistered_page() {
        let course = cs162();
        let ctx = course.page_context("generics");

        let err = course.page_metadata(&ctx).unwrap_err();
        assert!(matches!(err, SiteError::Lookup { .. }));
        assert!(err.to_string().contains("generics"));
    }

    #[test]
    fn test_link_to_by_identifier() {
        let course = cs162();

        let link = course.link_to("references-and-copies").unwrap();
        assert_eq!(
            link,
            CrossLink {
                href: "/cs-162/lecture-notes/references".to_owned(),
                text: "References and Copies".to_owned(),
            }
        );
    }

    #[test]
    fn test_link_from_uses_context_parent_path() {
        let course = cs162();
        let ctx = PageContext::new("inheritance", "/archive/cs-162");

        let link = course.link_from(&ctx, "polymorphism").unwrap();
        assert_eq!(link.href, "/archive/cs-162/polymorphism");
        assert_eq!(link.text, "Polymorphism");
    }

    #[test]
    fn test_link_to_unknown_identifier() {
        let course = cs162();

        let err = course.link_to("generics").unwrap_err();
        match err {
            SiteError::Lookup { course, source } => {
                assert_eq!(course, "cs-162");
                assert_eq!(source.key(), "generics");
            }
            other => panic!("Expected lookup error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_links_collects_all_misses() {
        let course = cs162();

        let links = course.check_links(["encapsulation", "polymorphism"]).unwrap();
        assert_eq!(links.len(), 2);

        let errors = course
            .check_links(["generics", "encapsulation", "exceptions"])
            .unwrap_err();
        let keys: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys[0].contains("generics"));
        assert!(keys[1].contains("exceptions"));
    }

    #[test]
    fn test_index_lists_pages_in_source_order() {
        let course = cs162();

        let index = course.index();
        assert_eq!(index.metadata.title, "CS 162 Lecture Notes");
        assert_eq!(
            index.entries,
            vec![
                IndexEntry {
                    href: "/cs-162/lecture-notes/encapsulation".to_owned(),
                    title: "Encapsulation".to_owned(),
                },
                IndexEntry {
                    href: "/cs-162/lecture-notes/inheritance".to_owned(),
                    title: "Inheritance".to_owned(),
                },
                IndexEntry {
                    href: "/cs-162/lecture-notes/polymorphism".to_owned(),
                    title: "Polymorphism".to_owned(),
                },
                IndexEntry {
                    href: "/cs-162/lecture-notes/references".to_owned(),
                    title: "References and Copies".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_index_uses_winning_title_for_repeated_path() {
        let registry = PageRegistry::new(vec![
            PageDescriptor::new("vim", "Vim (old)", "vim-old"),
            PageDescriptor::new("vim", "Vim", "vim"),
        ])
        .unwrap();
        let course = Course::new(
            &course_config("lecture-notes", "/lecture-notes"),
            registry,
            SiteInfo::default(),
        );

        let titles: Vec<String> = course.index().entries.into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Vim".to_owned(), "Vim".to_owned()]);
    }

    #[test]
    fn test_load_reads_sources_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sources_path = temp_dir.path().join("sources.yaml");
        std::fs::write(
            &sources_path,
            "pages:\n  - pathName: strings\n    pageTitle: Strings\n    namedIdentifier: strings\n",
        )
        .unwrap();
        let config = CourseConfig {
            sources_path,
            ..course_config("cs-274", "/cs-274/lecture-notes")
        };

        let course = Course::load(&config, SiteInfo::default()).unwrap();
        assert_eq!(course.name(), "cs-274");
        assert_eq!(course.link_to("strings").unwrap().href, "/cs-274/lecture-notes/strings");
    }

    #[test]
    fn test_load_missing_sources_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CourseConfig {
            sources_path: temp_dir.path().join("sources.yaml"),
            ..course_config("cs-274", "/cs-274/lecture-notes")
        };

        let err = Course::load(&config, SiteInfo::default()).unwrap_err();
        assert!(matches!(err, SiteError::Registry { .. }));
        assert!(err.to_string().contains("cs-274"));
    }
}
