//! Diagnostic rendering of a network's content.

use std::fmt::Write;

use plexnet_engine::MlNetwork;

/// Renders a network as indented text: the summary line, then actors,
/// layers with their nodes, and edges.
///
/// Intended for logs and debugging sessions, not as a wire format.
#[must_use]
pub fn render(net: &MlNetwork) -> String {
    let mut out = String::new();
    // Infallible writes: fmt::Write on String cannot fail.
    let _ = writeln!(out, "{net}");

    let _ = writeln!(out, "actors:");
    for actor in net.actors() {
        let _ = writeln!(out, "  {actor}");
    }

    let _ = writeln!(out, "layers:");
    for layer in net.layers() {
        let directed = if net.is_directed(layer, layer) {
            "directed"
        } else {
            "undirected"
        };
        let _ = writeln!(out, "  {layer} ({directed})");
        for node in net.nodes_in(layer) {
            let _ = writeln!(out, "    {node}");
        }
    }

    let _ = writeln!(out, "edges:");
    for edge in net.edges() {
        let _ = writeln!(out, "  {edge}");
    }
    out
}
