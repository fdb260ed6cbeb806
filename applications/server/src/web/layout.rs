/// Shared page shell: sidebar navigation, styles and the banner script
use axum::response::Html;

pub const SITE_TITLE: &str = "UserHub - User Management";

/// Which sidebar entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Users,
}

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f5f7ff; color: #334155; }
.shell { display: flex; min-height: 100vh; }
aside { width: 16rem; background: #334155; color: #fff; }
aside .brand { padding: 1.5rem; font-size: 1.25rem; border-bottom: 1px solid #475569; }
aside nav a { display: block; padding: 0.75rem 1.5rem; color: #cbd5e1; text-decoration: none; }
aside nav a.active { background: #475569; color: #fff; }
main { flex: 1; padding: 2rem; }
.content { max-width: 72rem; margin: 0 auto; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.card { display: block; background: #fff; padding: 1.5rem; border-radius: 1rem; color: inherit; text-decoration: none; box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08); }
.stat-value { font-size: 1.5rem; color: #60a5fa; }
.avatar { display: inline-flex; width: 3rem; height: 3rem; border-radius: 50%; align-items: center; justify-content: center; background: #818cf8; color: #fff; margin-right: 1rem; }
.toolbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
.button { padding: 0.5rem 1rem; border: 0; border-radius: 0.5rem; background: #6366f1; color: #fff; text-decoration: none; cursor: pointer; }
.button.secondary { background: #e2e8f0; color: #334155; }
.empty { text-align: center; padding: 3rem 0; }
fieldset { border: 0; padding: 0; margin: 0 0 2rem; }
label { display: block; margin-bottom: 1rem; font-size: 0.875rem; }
input { display: block; width: 100%; padding: 0.75rem; margin-top: 0.25rem; border: 1px solid #bfdbfe; border-radius: 0.75rem; box-sizing: border-box; }
dl { display: grid; grid-template-columns: 10rem 1fr; gap: 0.5rem; }
.notification { position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); padding: 1rem; border-radius: 0.5rem; color: #fff; z-index: 50; }
.notification-success { background: #22c55e; }
.notification-error { background: #ef4444; }
.notification-close { margin-left: 0.5rem; background: none; border: 0; color: #fff; cursor: pointer; }
"#;

/// Removes each banner after its deadline, or at once when its close button
/// is clicked (clearing the pending timer).
const BANNER_SCRIPT: &str = r#"
document.querySelectorAll('.notification').forEach(function (banner) {
  var timer = setTimeout(function () { banner.remove(); },
    Number(banner.dataset.dismissAfterMs));
  banner.querySelector('.notification-close').addEventListener('click', function () {
    clearTimeout(timer);
    banner.remove();
  });
});
"#;

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active { r#" class="active""# } else { "" };
    format!(r#"<a href="{href}"{class}>{label}</a>"#)
}

/// Wrap page content in the site shell
pub fn render_page(active: NavItem, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
<div class="shell">
<aside>
  <div class="brand">UserHub</div>
  <nav>
    {dashboard}
    {users}
  </nav>
</aside>
<main><div class="content">
{content}
</div></main>
</div>
<script>{script}</script>
</body>
</html>
"#,
        title = SITE_TITLE,
        styles = STYLES,
        dashboard = nav_link("/", "Dashboard", active == NavItem::Dashboard),
        users = nav_link("/users", "Users", active == NavItem::Users),
        content = content,
        script = BANNER_SCRIPT,
    ))
}
