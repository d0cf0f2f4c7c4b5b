//! Per-page resource planning.
//!
//! Each page type gets a stylesheet and a script module named after it,
//! plus a language overlay stylesheet. Applying the plan appends the
//! elements to `head`; the insertions go through the mutation journal
//! like everything else, and never qualify as image candidates.

use serde::Serialize;

use crate::config::ResourcesConfig;
use crate::core::PageClassification;
use crate::dom::Document;

/// How a resource is loaded into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Stylesheet,
    Module,
}

/// One planned page resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub href: String,
}

/// The ordered resource set for one classified page.
#[derive(Debug, Clone, Serialize)]
pub struct PageResources {
    pub resources: Vec<Resource>,
}

impl PageResources {
    /// Plan the resources for a classification: page stylesheet, page
    /// module, then the language overlay.
    pub fn plan(classification: &PageClassification, config: &ResourcesConfig) -> Self {
        let page_type = classification.page_type.as_str();
        let lang = classification.language.code();
        Self {
            resources: vec![
                Resource {
                    kind: ResourceKind::Stylesheet,
                    href: format!("{}/{page_type}.css", config.style_root),
                },
                Resource {
                    kind: ResourceKind::Module,
                    href: format!("{}/{page_type}.js", config.script_root),
                },
                Resource {
                    kind: ResourceKind::Stylesheet,
                    href: format!("{}.{lang}.css", config.dict_prefix),
                },
            ],
        }
    }

    /// Append the planned elements to the document head.
    pub fn apply(&self, doc: &mut Document) {
        let head = doc.head();
        for resource in &self.resources {
            let id = match resource.kind {
                ResourceKind::Stylesheet => {
                    let link = doc.create_element("link");
                    if let Some(el) = doc.element_mut(link) {
                        el.set_attr("rel", "stylesheet");
                        el.set_attr("href", &resource.href);
                    }
                    link
                }
                ResourceKind::Module => {
                    let script = doc.create_element("script");
                    if let Some(el) = doc.element_mut(script) {
                        el.set_attr("type", "module");
                        el.set_attr("src", &resource.href);
                    }
                    script
                }
            };
            doc.append(head, id);
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PageLocation;

    fn plan_for(path: &str) -> PageResources {
        let location = PageLocation::new("blog.adobe.com", path);
        let classification = PageClassification::classify(&location);
        PageResources::plan(&classification, &ResourcesConfig::default())
    }

    #[test]
    fn test_plan_for_post() {
        let plan = plan_for("/en/2021/12/09/my-post");
        let hrefs: Vec<&str> = plan.resources.iter().map(|r| r.href.as_str()).collect();
        assert_eq!(hrefs, ["/style/post.css", "/scripts/post.js", "/dict.en.css"]);
        assert_eq!(plan.resources[1].kind, ResourceKind::Module);
    }

    #[test]
    fn test_plan_follows_language() {
        let plan = plan_for("/ko/topics/news");
        let hrefs: Vec<&str> = plan.resources.iter().map(|r| r.href.as_str()).collect();
        assert_eq!(
            hrefs,
            ["/style/topic.css", "/scripts/topic.js", "/dict.ko.css"]
        );
    }

    #[test]
    fn test_apply_appends_to_head() {
        let mut doc = Document::new();
        plan_for("/en/authors/jane").apply(&mut doc);

        let head = doc.head();
        let links: Vec<_> = doc.children_by_tag(head, "link").collect();
        assert_eq!(links.len(), 2);
        let link = doc.element(links[0]).unwrap();
        assert_eq!(link.attr("rel"), Some("stylesheet"));
        assert_eq!(link.attr("href"), Some("/style/author.css"));

        let script = doc.find_by_tag(head, "script").unwrap();
        let script = doc.element(script).unwrap();
        assert_eq!(script.attr("type"), Some("module"));
        assert_eq!(script.attr("src"), Some("/scripts/author.js"));

        // Insertions are journaled
        assert_eq!(doc.take_batch().len(), 3);
    }
}
