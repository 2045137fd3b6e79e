//! Directed, labeled cross-reference graph between topics.
//!
//! Built once from the registry's topics. Edges keep declaration order and
//! are addressable from both ends. Edges whose target is not a known topic
//! stay in the graph, marked unresolved.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::domain::{ContentType, EducationalContent, Relationship};

/// One declared cross-reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub target_type: ContentType,
    pub relationship: Relationship,
    pub label: String,
    /// False when `target` is not a topic id in the registry
    pub resolved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CrossReferenceGraph {
    edges: Vec<Edge>,
    outgoing: HashMap<String, Vec<usize>>,
    incoming: HashMap<String, Vec<usize>>,
}

impl CrossReferenceGraph {
    /// Build the graph from every topic's declared cross-references
    pub fn build<'a>(topics: impl IntoIterator<Item = &'a EducationalContent> + Clone) -> Self {
        let known: HashSet<&str> = topics.clone().into_iter().map(|t| t.id.as_str()).collect();

        let mut graph = Self::default();
        for topic in topics {
            for reference in &topic.cross_references {
                let pos = graph.edges.len();
                graph.edges.push(Edge {
                    source: topic.id.clone(),
                    target: reference.target_id.clone(),
                    target_type: reference.target_type,
                    relationship: reference.relationship,
                    label: reference.label.clone(),
                    resolved: known.contains(reference.target_id.as_str()),
                });
                graph.outgoing.entry(topic.id.clone()).or_default().push(pos);
                graph
                    .incoming
                    .entry(reference.target_id.clone())
                    .or_default()
                    .push(pos);
            }
        }

        graph
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<&Edge> {
        positions
            .map(|ps| ps.iter().map(|&p| &self.edges[p]).collect())
            .unwrap_or_default()
    }

    /// Edges declared by `id`, in declaration order
    pub fn outgoing(&self, id: &str) -> Vec<&Edge> {
        self.collect(self.outgoing.get(id))
    }

    /// Edges pointing at `id`, in declaration order
    pub fn incoming(&self, id: &str) -> Vec<&Edge> {
        self.collect(self.incoming.get(id))
    }

    /// Outgoing edges of one relationship type
    pub fn related(&self, id: &str, relationship: Relationship) -> Vec<&Edge> {
        self.outgoing(id)
            .into_iter()
            .filter(|edge| edge.relationship == relationship)
            .collect()
    }

    /// Topic ids reachable from `id` over resolved edges within `max_depth`
    /// hops, breadth-first. The start id is not included.
    pub fn reachable(&self, id: &str, max_depth: usize) -> Vec<&str> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(id);
        queue.push_back((id, 0usize));

        while let Some((current, depth)) = queue.pop_front() {
            if depth == max_depth {
                continue;
            }
            for edge in self.outgoing(current) {
                if edge.resolved && visited.insert(edge.target.as_str()) {
                    order.push(edge.target.as_str());
                    queue.push_back((edge.target.as_str(), depth + 1));
                }
            }
        }

        order
    }

    /// Every edge whose target is not a known topic
    pub fn dangling(&self) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| !edge.resolved).collect()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CrossReference;

    fn topic(id: &str, refs: &[(&str, Relationship)]) -> EducationalContent {
        refs.iter().fold(
            EducationalContent::new(id, ContentType::Concept, id),
            |topic, (target, rel)| {
                topic.with_cross_reference(CrossReference::new(
                    *target,
                    ContentType::Concept,
                    *rel,
                    *target,
                ))
            },
        )
    }

    fn sample() -> Vec<EducationalContent> {
        vec![
            topic(
                "a",
                &[
                    ("b", Relationship::Child),
                    ("c", Relationship::Related),
                    ("ghost", Relationship::SeeAlso),
                ],
            ),
            topic("b", &[("c", Relationship::Sibling), ("a", Relationship::Parent)]),
            topic("c", &[("d", Relationship::Related)]),
            topic("d", &[]),
        ]
    }

    #[test]
    fn test_outgoing_and_incoming_keep_order() {
        let topics = sample();
        let graph = CrossReferenceGraph::build(&topics);

        let out: Vec<&str> = graph.outgoing("a").iter().map(|e| e.target.as_str()).collect();
        assert_eq!(out, vec!["b", "c", "ghost"]);

        let inc: Vec<&str> = graph.incoming("c").iter().map(|e| e.source.as_str()).collect();
        assert_eq!(inc, vec!["a", "b"]);

        assert!(graph.outgoing("d").is_empty());
        assert!(graph.outgoing("unknown").is_empty());
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_related_filters_by_relationship() {
        let topics = sample();
        let graph = CrossReferenceGraph::build(&topics);

        let children = graph.related("a", Relationship::Child);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].target, "b");
        assert!(graph.related("a", Relationship::Sibling).is_empty());
    }

    #[test]
    fn test_dangling_edges_stay_unresolved() {
        let topics = sample();
        let graph = CrossReferenceGraph::build(&topics);

        let dangling = graph.dangling();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].source, "a");
        assert_eq!(dangling[0].target, "ghost");
        assert_eq!(graph.incoming("ghost").len(), 1);
    }

    #[test]
    fn test_reachable_is_breadth_first_and_bounded() {
        let topics = sample();
        let graph = CrossReferenceGraph::build(&topics);

        assert_eq!(graph.reachable("a", 0), Vec::<&str>::new());
        assert_eq!(graph.reachable("a", 1), vec!["b", "c"]);
        assert_eq!(graph.reachable("a", 2), vec!["b", "c", "d"]);
        assert_eq!(graph.reachable("b", 5), vec!["c", "a", "d"]);
    }
}
