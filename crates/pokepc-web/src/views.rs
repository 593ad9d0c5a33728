//! HTML rendering for the login, signup, and collection pages.
//!
//! Views are pure functions from typed inputs to markup strings, composed
//! from small shell/banner/row helpers so they stay testable without the
//! HTTP layer. Reflected `error` text is interpolated as-is; sanitisation
//! is out of scope for this server.

use pokepc_core::{creature::Creature, user::UserId};

// ─── Shell helpers ───────────────────────────────────────────────────────────

const NARROW_BODY: &str =
  "font-family: Arial; max-width: 400px; margin: 50px auto; padding: 20px;";
const WIDE_BODY: &str =
  "font-family: Arial; max-width: 800px; margin: 20px auto; padding: 20px;";
const CELL: &str = "border: 1px solid #ddd; padding: 8px;";

fn page(title: &str, body_style: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n\
     <body style=\"{body_style}\">\n{body}</body>\n</html>\n"
  )
}

fn error_banner(error: Option<&str>) -> String {
  match error {
    Some(message) => format!("<p style=\"color: red;\">{message}</p>\n"),
    None => String::new(),
  }
}

fn labelled_input(label: &str, kind: &str, name: &str, extra: &str) -> String {
  format!(
    "<div style=\"margin: 10px 0;\">\n\
     <label>{label}</label><br>\n\
     <input type=\"{kind}\" name=\"{name}\"{extra} style=\"width: 100%; padding: 8px;\">\n\
     </div>\n"
  )
}

fn submit_button(label: &str, style: &str) -> String {
  format!("<button type=\"submit\" style=\"{style}\">{label}</button>\n")
}

// ─── Login page ──────────────────────────────────────────────────────────────

/// `GET /` body. `error` is the reflected query-string message.
pub fn login_page(error: Option<&str>) -> String {
  let body = format!(
    "<h1>Pokemon PC Login</h1>\n\
     {banner}\
     <form method=\"POST\" action=\"/\">\n\
     {user}\
     {password}\
     {button}\
     </form>\n\
     <p><a href=\"/signup\">Sign Up</a></p>\n",
    banner = error_banner(error),
    user = labelled_input("Username:", "text", "user", " required"),
    password = labelled_input("Password:", "password", "password", " required"),
    button = submit_button(
      "Login",
      "width: 100%; padding: 10px; background: #007cba; color: white; border: none;",
    ),
  );
  page("Pokemon PC - Login", NARROW_BODY, &body)
}

// ─── Signup page ─────────────────────────────────────────────────────────────

/// `GET /signup` body.
pub fn signup_page(error: Option<&str>) -> String {
  let body = format!(
    "<h1>Sign Up</h1>\n\
     {banner}\
     <form method=\"POST\" action=\"/signup\">\n\
     {user}\
     {password}\
     {button}\
     </form>\n\
     <p><a href=\"/\">Back to Login</a></p>\n",
    banner = error_banner(error),
    user = labelled_input("Username:", "text", "user", " required"),
    password = labelled_input("Password:", "password", "password", " required"),
    button = submit_button(
      "Sign Up",
      "width: 100%; padding: 10px; background: #007cba; color: white; border: none;",
    ),
  );
  page("Pokemon PC - Sign Up", NARROW_BODY, &body)
}

// ─── Collection page ─────────────────────────────────────────────────────────

/// `GET /pc` body: the add-record form followed by the owner's records
/// sorted as the store returned them.
pub fn collection_page(
  user_id: UserId,
  records: &[Creature],
  error: Option<&str>,
) -> String {
  let body = format!(
    "<h1>Pokemon PC</h1>\n\
     {banner}\
     {add_form}\
     <h2>Your Pokemon Collection</h2>\n\
     {listing}\
     <p><a href=\"/\">Logout</a></p>\n",
    banner = error_banner(error),
    add_form = add_form(user_id),
    listing = listing(user_id, records),
  );
  page("Pokemon PC", WIDE_BODY, &body)
}

fn add_form(user_id: UserId) -> String {
  format!(
    "<div style=\"background: #f8f9fa; padding: 20px; border-radius: 5px; margin: 20px 0;\">\n\
     <h2>Add New Pokemon</h2>\n\
     <form method=\"POST\" action=\"/pc\">\n\
     <input type=\"hidden\" name=\"userID\" value=\"{user_id}\">\n\
     {dex}\
     {name}\
     {level}\
     {type1}\
     {type2}\
     {button}\
     </form>\n\
     </div>\n",
    dex = labelled_input("Dex Number:", "number", "dex", " required min=\"1\""),
    name = labelled_input("Name:", "text", "name", " required"),
    level =
      labelled_input("Level:", "number", "level", " required min=\"1\" max=\"100\""),
    type1 = labelled_input("Type 1:", "text", "type1", " required"),
    type2 = labelled_input("Type 2 (optional):", "text", "type2", ""),
    button = submit_button(
      "Add Pokemon",
      "padding: 10px 20px; background: #007cba; color: white; border: none;",
    ),
  )
}

fn listing(user_id: UserId, records: &[Creature]) -> String {
  if records.is_empty() {
    return "<p>No Pokemon in your PC yet!</p>\n".to_string();
  }

  let rows: String = records.iter().map(|c| record_row(user_id, c)).collect();
  format!(
    "<table style=\"width: 100%; border-collapse: collapse; margin: 20px 0;\">\n\
     <tr style=\"background: #f2f2f2;\">\n\
     <th style=\"{CELL}\">Dex #</th>\n\
     <th style=\"{CELL}\">Name</th>\n\
     <th style=\"{CELL}\">Level</th>\n\
     <th style=\"{CELL}\">Type 1</th>\n\
     <th style=\"{CELL}\">Type 2</th>\n\
     <th style=\"{CELL}\">Action</th>\n\
     </tr>\n\
     {rows}</table>\n"
  )
}

fn record_row(user_id: UserId, creature: &Creature) -> String {
  format!(
    "<tr>\n\
     <td style=\"{CELL}\">#{dex}</td>\n\
     <td style=\"{CELL}\">{name}</td>\n\
     <td style=\"{CELL}\">{level}</td>\n\
     <td style=\"{CELL}\">{type1}</td>\n\
     <td style=\"{CELL}\">{type2}</td>\n\
     <td style=\"{CELL}\">\n\
     <form method=\"POST\" action=\"/pc/delete\" style=\"display: inline;\">\n\
     <input type=\"hidden\" name=\"PID\" value=\"{id}\">\n\
     <input type=\"hidden\" name=\"userID\" value=\"{user_id}\">\n\
     <button type=\"submit\" style=\"padding: 5px 10px; background: #dc3545; color: white; border: none;\">Delete</button>\n\
     </form>\n\
     </td>\n\
     </tr>\n",
    dex = creature.dex,
    name = creature.name,
    level = creature.level,
    type1 = creature.type1,
    type2 = creature.type2.as_deref().unwrap_or("-"),
    id = creature.id,
  )
}

// ─── Error pages ─────────────────────────────────────────────────────────────

/// Body for unmatched routes.
pub fn not_found_page() -> String {
  "<h1>404 - Page Not Found</h1>".to_string()
}

/// Body for rejected request input.
pub fn bad_request_page(message: &str) -> String {
  format!("<h1>Bad Request</h1><pre>{message}</pre>")
}

/// Body for unhandled failures; the raw message is exposed, matching the
/// original server's behavior.
pub fn server_error_page(message: &str) -> String {
  format!("<h1>Internal Server Error</h1><pre>{message}</pre>")
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn pikachu() -> Creature {
    Creature {
      id:    7,
      dex:   25,
      name:  "Pikachu".to_string(),
      level: 12,
      type1: "Electric".to_string(),
      type2: None,
      owner: 1,
    }
  }

  #[test]
  fn login_page_has_form_and_signup_link() {
    let html = login_page(None);
    assert!(html.contains("<title>Pokemon PC - Login</title>"));
    assert!(html.contains("action=\"/\""));
    assert!(html.contains("name=\"user\""));
    assert!(html.contains("name=\"password\""));
    assert!(html.contains("<a href=\"/signup\">Sign Up</a>"));
    assert!(!html.contains("color: red"));
  }

  #[test]
  fn login_page_reflects_error() {
    let html = login_page(Some("Invalid credentials"));
    assert!(html.contains("<p style=\"color: red;\">Invalid credentials</p>"));
  }

  #[test]
  fn signup_page_links_back_to_login() {
    let html = signup_page(None);
    assert!(html.contains("<title>Pokemon PC - Sign Up</title>"));
    assert!(html.contains("action=\"/signup\""));
    assert!(html.contains("<a href=\"/\">Back to Login</a>"));
  }

  #[test]
  fn empty_collection_shows_placeholder() {
    let html = collection_page(1, &[], None);
    assert!(html.contains("No Pokemon in your PC yet!"));
    assert!(!html.contains("<table"));
  }

  #[test]
  fn collection_row_renders_all_fields() {
    let html = collection_page(1, &[pikachu()], None);
    assert!(html.contains("#25"));
    assert!(html.contains("Pikachu"));
    assert!(html.contains("12"));
    assert!(html.contains("Electric"));
    // Missing second type renders as a dash.
    assert!(html.contains(">-</td>"));
    // The delete form carries the record and owner ids.
    assert!(html.contains("name=\"PID\" value=\"7\""));
    assert!(html.contains("name=\"userID\" value=\"1\""));
  }

  #[test]
  fn add_form_carries_hidden_user_id() {
    let html = collection_page(42, &[], None);
    assert!(html.contains("name=\"userID\" value=\"42\""));
    assert!(html.contains("Add New Pokemon"));
  }

  #[test]
  fn second_type_is_rendered_when_present() {
    let mut c = pikachu();
    c.type2 = Some("Poison".to_string());
    let html = collection_page(1, &[c], None);
    assert!(html.contains("Poison"));
    assert!(!html.contains(">-</td>"));
  }
}
