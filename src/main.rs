// src/main.rs — Activity Board (Rust + Yew + WASM)
//
// Browse extracurricular activities, sign a participant up by email, and
// remove a participant from an activity's roster. Talks to a REST backend:
//   GET    /activities
//   POST   /activities/{name}/signup?email={email}
//   DELETE /activities/{name}/signup?email={email}

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use indexmap::IndexMap;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const CATALOG_URL: &str = "/activities";

const SIGNUP_NOTICE_MS: u32 = 5000;
const REMOVAL_NOTICE_MS: u32 = 3000;

// ---------- catalog model ----------

/// Insertion order mirrors the order the server returned, which is also the
/// render order of the cards.
type Catalog = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Activity {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// Signed so an over-subscribed roster shows a negative count instead of
/// wrapping.
fn spots_left(activity: &Activity) -> i64 {
    activity.max_participants as i64 - activity.participants.len() as i64
}

/// Avatar initials: first character of up to two whitespace-separated tokens,
/// uppercased. A bare email yields a single letter.
fn initials(who: &str) -> String {
    who.split_whitespace()
        .filter_map(|token| token.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn signup_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// What a form submit should send: `None` when either field is still blank
/// (the browser's `required` check covers the usual path, this covers a
/// programmatic submit).
fn signup_request(selected: &str, email: &str) -> Option<(String, String)> {
    let address = email.trim();
    if selected.is_empty() || address.is_empty() {
        return None;
    }
    Some((selected.to_string(), address.to_string()))
}

fn apply_signup(catalog: &mut Catalog, activity: &str, email: &str) -> bool {
    match catalog.get_mut(activity) {
        Some(a) => {
            a.participants.push(email.to_string());
            true
        }
        None => false,
    }
}

fn apply_removal(catalog: &mut Catalog, activity: &str, email: &str) -> bool {
    let Some(a) = catalog.get_mut(activity) else {
        return false;
    };
    let before = a.participants.len();
    a.participants.retain(|p| p != email);
    a.participants.len() != before
}

// ---------- board state ----------

/// (activity name, participant email) of an in-flight DELETE.
type RemovalKey = (String, String);

#[derive(Clone, PartialEq)]
enum CatalogState {
    Loading,
    Failed,
    Ready(Catalog),
}

#[derive(Clone, PartialEq)]
struct Board {
    catalog: CatalogState,
    pending_removals: HashSet<RemovalKey>,
}

enum BoardAction {
    LoadStarted,
    LoadSucceeded(Catalog),
    LoadFailed,
    SignupAccepted { activity: String, email: String },
    RemovalStarted(RemovalKey),
    RemovalSucceeded(RemovalKey),
    RemovalFailed(RemovalKey),
}

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: BoardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::LoadStarted => {
                next.catalog = CatalogState::Loading;
                next.pending_removals.clear();
            }
            BoardAction::LoadSucceeded(catalog) => {
                // Wholesale replacement, no diffing against the old catalog.
                next.catalog = CatalogState::Ready(catalog);
                next.pending_removals.clear();
            }
            BoardAction::LoadFailed => {
                next.catalog = CatalogState::Failed;
            }
            BoardAction::SignupAccepted { activity, email } => {
                if let CatalogState::Ready(catalog) = &mut next.catalog {
                    apply_signup(catalog, &activity, &email);
                }
            }
            BoardAction::RemovalStarted(key) => {
                next.pending_removals.insert(key);
            }
            BoardAction::RemovalSucceeded(key) => {
                next.pending_removals.remove(&key);
                if let CatalogState::Ready(catalog) = &mut next.catalog {
                    apply_removal(catalog, &key.0, &key.1);
                }
            }
            BoardAction::RemovalFailed(key) => {
                next.pending_removals.remove(&key);
            }
        }
        Rc::new(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            catalog: CatalogState::Loading,
            pending_removals: HashSet::new(),
        }
    }
}

// ---------- notices ----------

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Error(s) => s,
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "success",
            Notice::Error(_) => "error",
        }
    }
}

fn signup_error_text(detail: Option<String>) -> String {
    detail.unwrap_or_else(|| "An error occurred".to_string())
}

fn removal_error_text(detail: Option<String>, email: &str) -> String {
    detail.unwrap_or_else(|| format!("Failed to remove {email}"))
}

// ---------- activities API ----------

enum ApiError {
    /// The request never completed, or the body was not the JSON we expected.
    Network(String),
    /// Non-2xx status; `detail` is the server's structured explanation when
    /// the body carried one.
    Server { detail: Option<String> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "request failed: {msg}"),
            ApiError::Server { detail: Some(d) } => {
                write!(f, "server rejected the request: {d}")
            }
            ApiError::Server { detail: None } => write!(f, "server rejected the request"),
        }
    }
}

#[derive(Deserialize)]
struct SignupReply {
    message: String,
}

#[derive(Deserialize)]
struct ErrorReply {
    #[serde(default)]
    detail: Option<String>,
}

async fn server_error(resp: gloo_net::http::Response) -> ApiError {
    let detail = resp.json::<ErrorReply>().await.ok().and_then(|b| b.detail);
    ApiError::Server { detail }
}

async fn fetch_catalog() -> Result<Catalog, ApiError> {
    let resp = gloo_net::http::Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    resp.json::<Catalog>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn post_signup(activity: &str, email: &str) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(&signup_url(activity, email))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    resp.json::<SignupReply>()
        .await
        .map(|r| r.message)
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn delete_signup(activity: &str, email: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(&signup_url(activity, email))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    Ok(())
}

fn log_error(context: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

// ---------- view helpers ----------

/// The signup form's activity selector. The current selection is applied as
/// the element's `value` property (the `~` directive): once the user has
/// picked an option the control's dirty flag makes the `selected` content
/// attribute inert, so clearing the form after a successful signup only
/// takes effect through the property.
fn activity_select(selected: &str, options: Html, onchange: Callback<Event>) -> Html {
    html! {
        <select id="activity" required={true} {onchange} ~value={selected.to_string()}>
            <option value="" disabled={true} selected={selected.is_empty()}>
                { "-- Select an activity --" }
            </option>
            { options }
        </select>
    }
}

// ---------- component ----------

#[function_component(App)]
fn app() -> Html {
    let board = use_reducer(Board::default);
    let notice = use_state(|| None::<Notice>);
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    let email = use_state(String::new);
    let selected = use_state(String::new);

    // Show a notice; a Some(ms) delay schedules auto-hide. Replacing the
    // stored handle drops the previous timer, so a stale timeout can never
    // hide a newer message.
    let show_notice = {
        let notice = notice.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |(n, ms): (Notice, Option<u32>)| {
            notice.set(Some(n));
            *hide_timer.borrow_mut() = ms.map(|ms| {
                let notice = notice.clone();
                Timeout::new(ms, move || notice.set(None))
            });
        })
    };

    let load = {
        let board = board.clone();
        Callback::from(move |_: ()| {
            let board = board.clone();
            board.dispatch(BoardAction::LoadStarted);
            spawn_local(async move {
                match fetch_catalog().await {
                    Ok(catalog) => board.dispatch(BoardAction::LoadSucceeded(catalog)),
                    Err(err) => {
                        log_error("Error fetching activities", &err);
                        board.dispatch(BoardAction::LoadFailed);
                    }
                }
            });
        })
    };

    // Initial load on first render.
    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let on_refresh = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_signup = {
        let board = board.clone();
        let email = email.clone();
        let selected = selected.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((activity, address)) = signup_request(&selected, &email) else {
                return;
            };
            let board = board.clone();
            let email = email.clone();
            let selected = selected.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                match post_signup(&activity, &address).await {
                    Ok(message) => {
                        board.dispatch(BoardAction::SignupAccepted {
                            activity,
                            email: address,
                        });
                        email.set(String::new());
                        selected.set(String::new());
                        show_notice.emit((Notice::Success(message), Some(SIGNUP_NOTICE_MS)));
                    }
                    Err(ApiError::Server { detail }) => {
                        show_notice.emit((
                            Notice::Error(signup_error_text(detail)),
                            Some(SIGNUP_NOTICE_MS),
                        ));
                    }
                    Err(err) => {
                        log_error("Error signing up", &err);
                        show_notice.emit((
                            Notice::Error("Failed to sign up. Please try again.".to_string()),
                            Some(SIGNUP_NOTICE_MS),
                        ));
                    }
                }
            });
        })
    };

    let on_remove = {
        let board = board.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |key: RemovalKey| {
            // The button is disabled while a DELETE is in flight; this guard
            // covers a click that lands before the disabled state renders.
            if board.pending_removals.contains(&key) {
                return;
            }
            board.dispatch(BoardAction::RemovalStarted(key.clone()));
            let board = board.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                let (activity, participant) = key.clone();
                match delete_signup(&activity, &participant).await {
                    Ok(()) => {
                        board.dispatch(BoardAction::RemovalSucceeded(key));
                        show_notice.emit((
                            Notice::Success(format!("Removed {participant} from {activity}")),
                            Some(REMOVAL_NOTICE_MS),
                        ));
                    }
                    Err(ApiError::Server { detail }) => {
                        board.dispatch(BoardAction::RemovalFailed(key));
                        show_notice
                            .emit((Notice::Error(removal_error_text(detail, &participant)), None));
                    }
                    Err(err) => {
                        log_error("Error removing participant", &err);
                        board.dispatch(BoardAction::RemovalFailed(key));
                        show_notice.emit((
                            Notice::Error(format!("Failed to remove {participant}. Try again.")),
                            None,
                        ));
                    }
                }
            });
        })
    };

    let participant_row = |activity_name: &String, participant: &String| -> Html {
        let key: RemovalKey = (activity_name.clone(), participant.clone());
        let disabled = board.pending_removals.contains(&key);
        let onclick = {
            let on_remove = on_remove.clone();
            let key = key.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(key.clone()))
        };
        html! {
            <li class="participant-item" key={participant.clone()}>
                <span class="participant-avatar" aria-hidden="true">{ initials(participant) }</span>
                <span class="participant-name" title={participant.clone()}>{ participant.clone() }</span>
                <button
                    type="button"
                    class="participant-remove"
                    {disabled}
                    {onclick}
                    aria-label={format!("Remove participant {participant} from {activity_name}")}
                >
                    { "\u{d7}" }
                </button>
            </li>
        }
    };

    let activity_card = |name: &String, activity: &Activity| -> Html {
        let roster = if activity.participants.is_empty() {
            html! { <li class="muted">{ "No participants yet" }</li> }
        } else {
            html! { for activity.participants.iter().map(|p| participant_row(name, p)) }
        };
        html! {
            <div class="activity-card" key={name.clone()}>
                <h4>{ name.clone() }</h4>
                <p>{ activity.description.clone() }</p>
                <p><strong>{ "Schedule: " }</strong>{ activity.schedule.clone() }</p>
                <p class="availability">
                    <strong>{ "Availability: " }</strong>
                    { format!("{} spots left", spots_left(activity)) }
                </p>
                <div class="participants" aria-live="polite">
                    <strong>{ "Participants:" }</strong>
                    <ul class="participants-list">
                        { roster }
                    </ul>
                </div>
            </div>
        }
    };

    let list_region = match &board.catalog {
        CatalogState::Loading => html! { <p class="muted">{ "Loading activities..." }</p> },
        CatalogState::Failed => {
            html! { <p>{ "Failed to load activities. Please try again later." }</p> }
        }
        CatalogState::Ready(catalog) => html! {
            { for catalog.iter().map(|(name, activity)| activity_card(name, activity)) }
        },
    };

    let options = match &board.catalog {
        CatalogState::Ready(catalog) => html! {
            { for catalog.keys().map(|name| html! {
                <option value={name.clone()} selected={*selected == *name}>{ name.clone() }</option>
            }) }
        },
        _ => html! {},
    };

    let message = match &*notice {
        Some(n) => html! { <div id="message" class={n.css_class()}>{ n.text().to_string() }</div> },
        None => html! { <div id="message" class="hidden"></div> },
    };

    html! {
        <div class="wrap">
            <header class="hero">
                <h1>{ "Activity Board" }</h1>
                <p>{ "Browse activities and sign up by email." }</p>
                <button class="secondary" onclick={on_refresh}>{ "Refresh" }</button>
            </header>

            { message }

            <section class="board">
                <div id="activities-list">
                    { list_region }
                </div>

                <form id="signup-form" onsubmit={on_signup}>
                    <h3>{ "Sign up for an activity" }</h3>
                    <label for="email">{ "Email:" }</label>
                    <input
                        id="email"
                        type="email"
                        required={true}
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    <label for="activity">{ "Activity:" }</label>
                    { activity_select(&selected, options, on_activity_change) }
                    <button type="submit">{ "Sign Up" }</button>
                </form>
            </section>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: max,
            participants: participants.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn board_with(catalog: Catalog) -> Rc<Board> {
        Rc::new(Board {
            catalog: CatalogState::Ready(catalog),
            pending_removals: HashSet::new(),
        })
    }

    #[test]
    fn spots_left_derives_from_roster() {
        assert_eq!(spots_left(&activity(12, &[])), 12);
        assert_eq!(spots_left(&activity(12, &["a@x.com", "b@x.com"])), 10);
        // Over-subscribed rosters go negative rather than wrapping.
        assert_eq!(spots_left(&activity(1, &["a@x.com", "b@x.com"])), -1);
    }

    #[test]
    fn initials_take_first_two_tokens() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("mary ann smith"), "MA");
        assert_eq!(initials("a@x.com"), "A");
        assert_eq!(initials(""), "");
        assert_eq!(initials("  spaced   out  "), "SO");
    }

    #[test]
    fn signup_url_percent_encodes_both_parts() {
        assert_eq!(
            signup_url("Chess Club", "a+b@x.com"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn catalog_deserializes_in_server_order_with_optional_roster() {
        let json = r#"{
            "Chess Club": {"description":"d","schedule":"s","max_participants":2,"participants":["a@x.com"]},
            "Art Club": {"description":"d","schedule":"s","max_participants":5}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let names: Vec<&String> = catalog.keys().collect();
        assert_eq!(names, ["Chess Club", "Art Club"]);
        assert!(catalog["Art Club"].participants.is_empty());
    }

    #[test]
    fn apply_signup_appends_to_the_named_activity() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club".to_string(), activity(2, &["a@x.com"]));
        assert!(apply_signup(&mut catalog, "Chess Club", "b@x.com"));
        assert_eq!(catalog["Chess Club"].participants, ["a@x.com", "b@x.com"]);
        assert!(!apply_signup(&mut catalog, "No Such Club", "b@x.com"));
    }

    #[test]
    fn apply_removal_removes_only_that_email() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club".to_string(), activity(3, &["a@x.com", "b@x.com"]));
        assert!(apply_removal(&mut catalog, "Chess Club", "a@x.com"));
        assert_eq!(catalog["Chess Club"].participants, ["b@x.com"]);
        assert!(!apply_removal(&mut catalog, "Chess Club", "a@x.com"));
        assert!(!apply_removal(&mut catalog, "No Such Club", "b@x.com"));
    }

    #[test]
    fn removal_lifecycle_marks_pending_then_patches_roster() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club".to_string(), activity(2, &["a@x.com"]));
        let key = ("Chess Club".to_string(), "a@x.com".to_string());

        let board = board_with(catalog).reduce(BoardAction::RemovalStarted(key.clone()));
        // Pending key keeps the control disabled, so a second click cannot
        // issue a second request.
        assert!(board.pending_removals.contains(&key));

        let board = board.reduce(BoardAction::RemovalSucceeded(key.clone()));
        assert!(!board.pending_removals.contains(&key));
        let CatalogState::Ready(catalog) = &board.catalog else {
            panic!("catalog should stay loaded");
        };
        assert!(catalog["Chess Club"].participants.is_empty());
    }

    #[test]
    fn removal_failure_reenables_without_touching_roster() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club".to_string(), activity(2, &["a@x.com"]));
        let key = ("Chess Club".to_string(), "a@x.com".to_string());

        let board = board_with(catalog)
            .reduce(BoardAction::RemovalStarted(key.clone()))
            .reduce(BoardAction::RemovalFailed(key.clone()));
        assert!(!board.pending_removals.contains(&key));
        let CatalogState::Ready(catalog) = &board.catalog else {
            panic!("catalog should stay loaded");
        };
        assert_eq!(catalog["Chess Club"].participants, ["a@x.com"]);
    }

    #[test]
    fn signup_accepted_appends_optimistically() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club".to_string(), activity(2, &[]));
        let board = board_with(catalog).reduce(BoardAction::SignupAccepted {
            activity: "Chess Club".to_string(),
            email: "a@x.com".to_string(),
        });
        let CatalogState::Ready(catalog) = &board.catalog else {
            panic!("catalog should stay loaded");
        };
        assert_eq!(catalog["Chess Club"].participants, ["a@x.com"]);
        assert_eq!(spots_left(&catalog["Chess Club"]), 1);
    }

    #[test]
    fn reload_replaces_catalog_and_clears_pending() {
        let mut catalog = Catalog::new();
        catalog.insert("Chess Club".to_string(), activity(2, &["a@x.com"]));
        let key = ("Chess Club".to_string(), "a@x.com".to_string());
        let board = board_with(catalog).reduce(BoardAction::RemovalStarted(key.clone()));

        let mut fresh = Catalog::new();
        fresh.insert("Art Club".to_string(), activity(5, &[]));
        let board = board.reduce(BoardAction::LoadSucceeded(fresh));
        assert!(board.pending_removals.is_empty());
        let CatalogState::Ready(catalog) = &board.catalog else {
            panic!("catalog should be loaded");
        };
        assert!(catalog.contains_key("Art Club"));
        assert!(!catalog.contains_key("Chess Club"));
    }

    #[test]
    fn chess_club_scenario() {
        // Catalog with one activity, capacity 2, one signup.
        let json = r#"{"Chess Club": {"description":"d","schedule":"s","max_participants":2,"participants":["a@x.com"]}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(spots_left(&catalog["Chess Club"]), 1);
        assert_eq!(catalog["Chess Club"].participants, ["a@x.com"]);

        let key = ("Chess Club".to_string(), "a@x.com".to_string());
        let board = board_with(catalog)
            .reduce(BoardAction::RemovalStarted(key.clone()))
            .reduce(BoardAction::RemovalSucceeded(key));
        let CatalogState::Ready(catalog) = &board.catalog else {
            panic!("catalog should stay loaded");
        };
        // Empty roster renders the single muted placeholder row.
        assert!(catalog["Chess Club"].participants.is_empty());
        assert_eq!(spots_left(&catalog["Chess Club"]), 2);
    }

    #[test]
    fn error_texts_fall_back_when_detail_missing() {
        assert_eq!(
            signup_error_text(Some("Already signed up".to_string())),
            "Already signed up"
        );
        assert_eq!(signup_error_text(None), "An error occurred");
        assert_eq!(
            removal_error_text(None, "a@x.com"),
            "Failed to remove a@x.com"
        );
        assert_eq!(
            removal_error_text(Some("Not registered".to_string()), "a@x.com"),
            "Not registered"
        );
    }

    #[test]
    fn signup_request_requires_selection_and_email() {
        assert_eq!(
            signup_request("Chess Club", " a@x.com "),
            Some(("Chess Club".to_string(), "a@x.com".to_string()))
        );
        // After a successful signup the selection resets to empty; a submit
        // in that state must not produce a request.
        assert_eq!(signup_request("", "a@x.com"), None);
        assert_eq!(signup_request("Chess Club", "   "), None);
    }

    #[test]
    fn select_reset_goes_through_the_value_property() {
        use yew::virtual_dom::{ApplyAttributeAs, Attributes, VNode};

        let node = activity_select("", html! {}, Callback::noop());
        let VNode::VTag(tag) = node else {
            panic!("selector should be an element");
        };
        assert_eq!(tag.tag(), "select");

        // Once the user has picked an option, the element's dirty flag makes
        // `selected` content-attribute updates inert; clearing the form after
        // a signup only works if the selection is written as the `value`
        // property.
        let Attributes::Dynamic { keys, values } = &tag.attributes else {
            panic!("expected dynamic attributes, got {:?}", tag.attributes);
        };
        let slot = keys
            .iter()
            .position(|k| *k == "value")
            .expect("select should carry a value binding");
        let Some((value, apply_as)) = &values[slot] else {
            panic!("value binding should be set");
        };
        assert_eq!(value.as_str(), "");
        assert_eq!(*apply_as, ApplyAttributeAs::Property);
    }

    #[test]
    fn notice_maps_to_css_class() {
        let ok = Notice::Success("done".to_string());
        let bad = Notice::Error("nope".to_string());
        assert_eq!(ok.css_class(), "success");
        assert_eq!(bad.css_class(), "error");
        assert_eq!(ok.text(), "done");
        assert_eq!(bad.text(), "nope");
    }
}
