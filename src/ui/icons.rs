pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const CLIPBOARD: &str = "📋";
    pub const BULLET: &str = "•";
}
