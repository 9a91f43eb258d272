//! 元素树快照，用于调试输出

use serde::Serialize;

use super::element::{Element, ElementId, Node};
use super::style::Style;
use crate::Rect;

/// 单个元素及其子树的快照
#[derive(Debug, Clone, Serialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    pub style: Style,
    pub layout: Rect,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

impl ElementSnapshot {
    pub fn capture<T: Element + ?Sized>(node: &Node<T>) -> Self {
        let (id, type_name, name, classes, style, layout) = {
            let element = node.borrow();
            let base = element.base();
            (
                base.id(),
                element.type_name(),
                base.name.clone(),
                base.classes().to_vec(),
                base.style.clone(),
                base.layout,
            )
        };

        let children = node.children().iter().map(Self::capture).collect();

        Self { id, type_name, name, classes, style, layout, children }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 按名称深度优先查找
    pub fn find(&self, name: &str) -> Option<&ElementSnapshot> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::View;

    #[test]
    fn test_capture_nested() {
        let root = Node::new(View::new());
        root.set_name("root");
        let child = Node::new(View::new());
        child.set_name("child");
        child.add_to_class_list("card");
        root.add(&child.erase());

        let snap = ElementSnapshot::capture(&root);
        assert_eq!(snap.type_name, "View");
        assert_eq!(snap.children.len(), 1);
        assert_eq!(snap.find("child").map(|c| c.classes.clone()), Some(vec!["card".to_string()]));

        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["children"][0]["name"], "child");
        assert_eq!(value["style"]["width"], "Auto");
    }
}
