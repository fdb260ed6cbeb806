/// Page bodies for the dashboard, the user directory, the creation form and
/// the detail view
use super::html::escape;
use super::notification::Notification;
use userhub_core::{DashboardStats, User};

fn stat_card(value: usize, title: &str, caption: &str) -> String {
    format!(
        r#"<div class="card">
  <span class="stat-value">{value}</span>
  <h3>{title}</h3>
  <p>{caption}</p>
</div>"#
    )
}

pub fn dashboard(stats: DashboardStats) -> String {
    format!(
        r#"<header>
  <h1>Welcome to UserHub</h1>
  <p>Elegant user management with a touch of sophistication</p>
</header>
<section class="grid">
{total}
{active}
{new_today}
</section>"#,
        total = stat_card(stats.total_users, "Total Users", "Registered users in the system"),
        active = stat_card(stats.active_users, "Active Users", "Currently active users"),
        new_today = stat_card(stats.new_today, "New Today", "Users registered today"),
    )
}

fn avatar(user: &User) -> String {
    user.initial()
        .map(|c| escape(&c.to_string()))
        .unwrap_or_default()
}

fn user_card(user: &User) -> String {
    format!(
        r#"<a class="card user-card" href="/users/{id}">
  <div><span class="avatar">{avatar}</span><strong>{name}</strong></div>
  <p class="company">{company}</p>
  <p class="email">{email}</p>
</a>"#,
        id = user.id,
        avatar = avatar(user),
        name = escape(&user.name),
        company = escape(&user.company.name),
        email = escape(&user.email),
    )
}

/// The directory page: search box, grid of matches, empty states
pub fn users_list(matches: &[&User], query: &str, notification: Option<&Notification>) -> String {
    let mut body = String::new();

    if let Some(notification) = notification {
        body.push_str(&notification.render());
        body.push('\n');
    }

    body.push_str(&format!(
        r#"<header>
  <h1>User Management</h1>
  <p>Manage and organize your users with ease</p>
</header>
<div class="toolbar">
  <form method="get" action="/users" role="search">
    <input type="text" name="q" placeholder="Search users..." value="{query}">
  </form>
  <a class="button" href="/users/new">Create User</a>
</div>
"#,
        query = escape(query),
    ));

    if matches.is_empty() {
        let (heading, hint) = if query.is_empty() {
            ("No users found", "Get started by creating your first user")
        } else {
            ("No matching users found", "Try adjusting your search terms")
        };
        body.push_str(&format!(
            r#"<div class="empty"><h3>{heading}</h3><p>{hint}</p></div>"#
        ));
    } else {
        body.push_str(r#"<section class="grid">"#);
        for user in matches {
            body.push('\n');
            body.push_str(&user_card(user));
        }
        body.push_str("\n</section>");
    }

    body
}

fn text_input(name: &str, label: &str, input_type: &str) -> String {
    format!(r#"<label>{label}<input name="{name}" type="{input_type}" required></label>"#)
}

/// The creation form; input names match `CreateUserForm`
pub fn new_user_form() -> String {
    let personal = [
        text_input("name", "Full Name", "text"),
        text_input("username", "Username", "text"),
        text_input("email", "Email Address", "email"),
        text_input("phone", "Phone Number", "text"),
        text_input("website", "Website", "text"),
    ]
    .join("\n");
    let address = [
        text_input("street", "Street", "text"),
        text_input("suite", "Suite", "text"),
        text_input("city", "City", "text"),
        text_input("zipcode", "Zipcode", "text"),
        text_input("lat", "Latitude", "text"),
        text_input("lng", "Longitude", "text"),
    ]
    .join("\n");
    let company = [
        text_input("companyName", "Company Name", "text"),
        text_input("catchPhrase", "Catch Phrase", "text"),
        text_input("bs", "Business", "text"),
    ]
    .join("\n");

    format!(
        r#"<header>
  <h2>Create New User</h2>
  <p>Add a new user to your system</p>
</header>
<form method="post" action="/users">
<fieldset><legend>Personal Information</legend>
{personal}
</fieldset>
<fieldset><legend>Address Information</legend>
{address}
</fieldset>
<fieldset><legend>Company Information</legend>
{company}
</fieldset>
<div class="toolbar">
  <a class="button secondary" href="/users">Cancel</a>
  <button class="button" type="submit">Create User</button>
</div>
</form>"#
    )
}

fn detail_row(term: &str, value: &str) -> String {
    format!("<dt>{term}</dt><dd>{}</dd>", escape(value))
}

pub fn user_detail(user: &User) -> String {
    let contact = [
        detail_row("Email", &user.email),
        detail_row("Phone", &user.phone),
        detail_row("Website", &user.website),
        detail_row("Username", &user.username),
    ]
    .concat();
    let address = [
        detail_row("Street", &user.address.street),
        detail_row("Suite", &user.address.suite),
        detail_row("City", &user.address.city),
        detail_row("Zipcode", &user.address.zipcode),
        detail_row(
            "Coordinates",
            &format!("{}, {}", user.address.geo.lat, user.address.geo.lng),
        ),
    ]
    .concat();
    let company = [
        detail_row("Name", &user.company.name),
        detail_row("Catch Phrase", &user.company.catch_phrase),
        detail_row("Business", &user.company.bs),
    ]
    .concat();

    format!(
        r#"<header>
  <span class="avatar">{avatar}</span>
  <h2>{name}</h2>
  <p>{company_name}</p>
</header>
<section><h3>Contact Information</h3><dl>{contact}</dl></section>
<section><h3>Address</h3><dl>{address}</dl></section>
<section><h3>Company</h3><dl>{company}</dl></section>
<p><a class="button secondary" href="/users">Close</a></p>"#,
        avatar = avatar(user),
        name = escape(&user.name),
        company_name = escape(&user.company.name),
    )
}

pub fn not_found(message: &str) -> String {
    format!(
        r#"<div class="empty"><h3>{}</h3><p><a href="/users">Back to users</a></p></div>"#,
        escape(message)
    )
}
