use crate::application::navigation::Route;

/// Static links between the three views. The active one is starred.
pub fn render_nav_bar(active: Option<Route>) -> String {
    Route::ALL
        .iter()
        .map(|route| {
            if Some(*route) == active {
                format!("*{}* ({})", route.label(), route.path())
            } else {
                format!("{} ({})", route.label(), route.path())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
