/// Rendering of DOT markup through the Graphviz `dot` executable
mod graphviz_presenter;

pub use graphviz_presenter::GraphvizPresenter;
