pub const PLACEHOLDER_NOTE: &str = "현재는 더미 최적화 로직. (거리/시간 기반 알고리즘 추가 예정)";

/// Keeps the starting place and sorts the rest by name. Lists of two or fewer
/// places are returned untouched.
pub fn reorder_places(mut places: Vec<String>) -> Vec<String> {
    if places.len() > 2 {
        places[1..].sort();
    }
    places
}
