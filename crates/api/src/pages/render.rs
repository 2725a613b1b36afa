//! HTML rendering for the admin pages.
//!
//! Pages are rendered in-handler as plain strings; the shell is small enough
//! that a template engine would outweigh the markup. All store-sourced text
//! passes through [`escape`] before interpolation.

use hekto_core::{LineItem, LoginErrors, LoginForm, MetricsSnapshot, Record, Section};

/// How the customer card list renders its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Profile fields only (Users and Products sections).
    Plain,
    /// Profile fields plus the record's line items (Orders section).
    WithItems,
}

/// Escapes text for interpolation into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body style="font-family: system-ui, sans-serif; margin: 0; background-color: #f3f4f6;">
{body}
</body>
</html>"#
    )
}

fn field_row(label: &str, name: &str, input_type: &str, value: &str, error: Option<&str>) -> String {
    let border = if error.is_some() { "#dc3545" } else { "#ced4da" };
    let message = error.map_or_else(String::new, |m| {
        format!(
            r#"<p style="color: #dc3545; margin: 0.25rem 0 0;">{}</p>"#,
            escape(m)
        )
    });
    format!(
        r#"<div style="margin-bottom: 1rem;">
    <label style="display: block; color: #374151;">{label}</label>
    <input type="{input_type}" name="{name}" value="{value}"
           style="width: 100%; padding: 0.5rem; border: 1px solid {border}; border-radius: 0.125rem; box-sizing: border-box;">
    {message}
</div>"#,
        value = escape(value),
    )
}

/// The login page: two fields, inline per-field messages, and the
/// non-field credentials message when the pair was rejected.
#[must_use]
pub fn login_page(form: &LoginForm, errors: &LoginErrors) -> String {
    let credentials_message = errors.credentials.as_deref().map_or_else(String::new, |m| {
        format!(r#"<p style="color: #dc3545;">{}</p>"#, escape(m))
    });
    let body = format!(
        r#"<div style="display: flex; align-items: center; justify-content: center; height: 100vh;">
    <div style="background: #ffffff; padding: 1.5rem; border-radius: 0.25rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2); width: 24rem;">
        <h2 style="margin-top: 0;">Hekto Admin Login</h2>
        <form method="post" action="/login">
            {admin_name_row}
            {password_row}
            {credentials_message}
            <button type="submit" style="width: 100%; background: #3b82f6; color: #ffffff; border: 0; padding: 0.5rem; border-radius: 0.25rem; cursor: pointer;">Login</button>
        </form>
    </div>
</div>"#,
        admin_name_row = field_row(
            "Admin Name",
            "admin_name",
            "text",
            &form.admin_name,
            errors.admin_name.as_deref(),
        ),
        password_row = field_row(
            "Password",
            "password",
            "password",
            &form.password,
            errors.password.as_deref(),
        ),
    );
    page("Hekto Admin Login", &body)
}

/// The navigation shell around an active section's content: sidebar,
/// header with logout, content area.
#[must_use]
pub fn shell_page(active: Section, content: &str) -> String {
    let nav_items: String = Section::ALL
        .iter()
        .map(|section| {
            let weight = if *section == active { "700" } else { "400" };
            format!(
                r#"<li><form method="post" action="/section/{slug}" style="margin: 0;">
    <button type="submit" style="display: block; width: 100%; text-align: left; padding: 1rem; background: none; border: 0; color: #ffffff; font-weight: {weight}; cursor: pointer;">{title}</button>
</form></li>"#,
                slug = section.slug(),
                title = section.title(),
            )
        })
        .collect();

    let body = format!(
        r#"<div style="display: flex; min-height: 100vh;">
    <aside style="width: 16rem; background: #3b82f6;">
        <h2 style="color: #ffffff; padding: 1rem; margin: 0;">Hekto Dashboard</h2>
        <nav><ul style="list-style: none; margin: 0; padding: 0;">{nav_items}</ul></nav>
    </aside>
    <div style="flex: 1; padding: 1rem;">
        <header style="display: flex; justify-content: space-between; align-items: center; background: #3b82f6; color: #ffffff; padding: 0.75rem 1rem; border-radius: 0.375rem; margin-bottom: 1.5rem;">
            <h1 style="margin: 0; font-size: 1.5rem;">{title} Overview</h1>
            <form method="post" action="/logout" style="margin: 0;">
                <button type="submit" style="border: 1px solid #ffffff; background: none; color: #ffffff; padding: 0.25rem 0.5rem; border-radius: 0.25rem; cursor: pointer;">Logout</button>
            </form>
        </header>
        <main>{content}</main>
    </div>
</div>"#,
        title = active.title(),
    );
    page("Hekto Dashboard", &body)
}

fn metric_tile(label: &str, value: &str) -> String {
    format!(
        r#"<div style="background: #ffffff; padding: 1rem; border-radius: 0.25rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2); border: 1px solid rgba(0,0,0,0.25);">
    <h2 style="margin: 0; font-size: 1.25rem; color: #2563eb;">{label}</h2>
    <p style="margin: 0.25rem 0 0; font-size: 1.25rem; font-weight: 700;">{value}</p>
</div>"#
    )
}

// Integer percentage of the larger bar; the chart has no axis, only ratio.
fn bar_width(value: usize, max: usize) -> usize {
    if max == 0 { 0 } else { value * 100 / max }
}

fn bar_row(label: &str, value: usize, max: usize, color: &str) -> String {
    format!(
        r#"<div style="display: flex; align-items: center; margin-bottom: 0.5rem;">
    <span style="width: 8rem;">{label}</span>
    <div style="flex: 1; background: #e5e7eb; border-radius: 0.25rem;">
        <div style="width: {width}%; background: {color}; height: 1.25rem; border-radius: 0.25rem;"></div>
    </div>
    <span style="width: 4rem; text-align: right;">{value}</span>
</div>"#,
        width = bar_width(value, max),
    )
}

/// The dashboard section: six metric tiles plus the users/products bars.
#[must_use]
pub fn dashboard(metrics: &MetricsSnapshot) -> String {
    let tiles = [
        metric_tile("Total Users", &metrics.total_users.to_string()),
        metric_tile("Total Products", &metrics.total_products.to_string()),
        metric_tile("Total Orders", &metrics.total_orders.to_string()),
        metric_tile("Total Revenue", &format!("PKR {}", metrics.total_revenue)),
        metric_tile("Pending Orders", &metrics.pending_orders.to_string()),
        metric_tile("New Users", &metrics.new_users.to_string()),
    ]
    .join("\n");

    let max = metrics.total_users.max(metrics.total_products);
    let chart = format!(
        r#"<section style="background: #ffffff; padding: 1rem; border-radius: 0.25rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2); margin-top: 1.5rem;">
    <h2 style="margin-top: 0; font-size: 1.25rem; color: #2563eb;">Users vs Products</h2>
    {users_bar}
    {products_bar}
</section>"#,
        users_bar = bar_row("Total Users", metrics.total_users, max, "#3b82f6"),
        products_bar = bar_row("Total Products", metrics.total_products, max, "#10b981"),
    );

    format!(
        r#"<div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem;">
{tiles}
</div>
{chart}"#
    )
}

fn item_list(items: &[LineItem]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<li style="color: #4b5563; margin-bottom: 0.5rem;">
    <strong>{name}</strong><br>Amount - PKR {price}
    <p style="color: #6b7280; margin: 0;">{description}</p>
</li>"#,
                name = escape(&item.name),
                price = item.price,
                description = escape(&item.description),
            )
        })
        .collect();
    format!(
        r#"<div style="margin-top: 1rem;">
    <h3 style="color: #1e3a8a; margin: 0 0 0.5rem;">Items:</h3>
    <ul style="padding-left: 1.25rem; margin: 0;">{rows}</ul>
</div>"#
    )
}

/// The customer card list shared by the Users, Products, and Orders
/// sections; Orders additionally lists each record's items inline.
#[must_use]
pub fn customer_cards(records: &[Record], style: CardStyle) -> String {
    if records.is_empty() {
        return r#"<p style="color: #dc2626; text-align: center; font-size: 1.125rem;">No customers found</p>"#
            .to_string();
    }

    let cards: String = records
        .iter()
        .map(|record| {
            let items = match style {
                CardStyle::Plain => String::new(),
                CardStyle::WithItems => item_list(&record.items),
            };
            format!(
                r#"<div style="background: #ffffff; padding: 1.5rem; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2);">
    <h2 style="margin: 0 0 0.5rem; color: #1e40af;">{name}</h2>
    <p style="color: #6b7280; margin: 0.125rem 0;">Email: {email}</p>
    <p style="color: #6b7280; margin: 0.125rem 0;">Phone No: {phone}</p>
    <p style="color: #6b7280; margin: 0.125rem 0;">City: {city}</p>
    <p style="color: #6b7280; margin: 0.125rem 0;">Address 1: {address1}</p>
    <p style="color: #6b7280; margin: 0.125rem 0;">Address 2: {address2}</p>
    {items}
</div>"#,
                name = escape(&record.name),
                email = escape(&record.email),
                phone = escape(&record.phone),
                city = escape(&record.city),
                address1 = escape(&record.address1),
                address2 = escape(&record.address2),
            )
        })
        .collect();

    format!(
        r#"<div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem;">
{cards}
</div>"#
    )
}
