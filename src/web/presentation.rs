//! DOM rendering: header (title, score, prompt), the door grid and toasts.
//!
//! Built once per session by [`DomPresentation::mount`]; afterwards it only
//! reacts to [`RoundView`] renders and [`Notification`]s from the controller.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, window};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::round::{Notification, Presentation, RoundView};

const ROOT_ID: &str = "dc-root";
const STYLE_ID: &str = "dc-style";
const TOAST_MS: i32 = 3_000;

const STYLE: &str = "
#dc-root { min-height:100vh; background:linear-gradient(#581c87,#9333ea); padding:32px; font-family:sans-serif; }
#dc-root header { text-align:center; margin-bottom:32px; color:#fff; }
#dc-root h1 { font-size:36px; margin:0 0 16px; }
#dc-score { font-size:20px; margin:0 0 16px; }
#dc-prompt { font-size:24px; color:#fde047; }
#dc-doors { display:grid; grid-template-columns:repeat(2,1fr); gap:16px; max-width:1280px; margin:0 auto; }
@media (min-width:768px) { #dc-doors { grid-template-columns:repeat(5,1fr); } }
@media (min-width:1024px) { #dc-doors { grid-template-columns:repeat(6,1fr); } }
.dc-door { position:relative; height:128px; border-radius:8px; border:4px solid #a16207; background:linear-gradient(#854d0e,#713f12); color:#eab308; font-size:24px; font-weight:bold; cursor:pointer; transition:transform .2s; }
.dc-door:hover { transform:scale(1.05); }
.dc-door:active { transform:scale(.95); }
.dc-knob { position:absolute; right:16px; top:50%; width:16px; height:16px; border-radius:50%; background:#eab308; }
.dc-bounce { animation:dc-bounce 1s infinite; }
@keyframes dc-bounce { 0%,100% { transform:translateY(-25%); } 50% { transform:none; } }
#dc-toasts { position:fixed; bottom:16px; right:16px; display:flex; flex-direction:column; gap:8px; z-index:50; }
.dc-toast { min-width:240px; padding:12px 16px; border-radius:6px; color:#fff; }
.dc-toast-ok { background:#22c55e; }
.dc-toast-bad { background:#dc2626; }
";

pub struct DomPresentation {
    doc: Document,
    score: Element,
    prompt: HtmlElement,
    doors: Vec<Element>,
    toasts: Element,
    highlighted: Option<u8>,
}

impl DomPresentation {
    /// Mounts a fresh page into `document.body`, replacing an earlier mount.
    pub fn mount(config: &GameConfig) -> Result<Self, GameError> {
        let win = window().ok_or(GameError::NoWindow)?;
        let doc = win.document().ok_or(GameError::NoDocument)?;
        let body = doc.body().ok_or(GameError::NoBody)?;

        ensure_style(&doc)?;
        if let Some(old) = doc.get_element_by_id(ROOT_ID) {
            old.remove();
        }

        let root = doc.create_element("main")?;
        root.set_id(ROOT_ID);

        let header = doc.create_element("header")?;
        let title = doc.create_element("h1")?;
        title.set_text_content(Some("Door Clicking Game"));
        let score = doc.create_element("p")?;
        score.set_id("dc-score");
        score.set_text_content(Some("Score: 0"));
        let prompt: HtmlElement = doc
            .create_element("p")?
            .dyn_into()
            .map_err(|_| GameError::Dom("prompt is not an HTMLElement".into()))?;
        prompt.set_id("dc-prompt");
        header.append_child(&title)?;
        header.append_child(&score)?;
        header.append_child(&prompt)?;

        let grid = doc.create_element("section")?;
        grid.set_id("dc-doors");
        let mut doors = Vec::with_capacity(config.door_count as usize);
        for door in config.doors() {
            let button = door_button(&doc, door)?;
            grid.append_child(&button)?;
            doors.push(button);
        }

        let toasts = doc.create_element("div")?;
        toasts.set_id("dc-toasts");

        root.append_child(&header)?;
        root.append_child(&grid)?;
        root.append_child(&toasts)?;
        body.append_child(&root)?;

        Ok(Self {
            doc,
            score,
            prompt,
            doors,
            toasts,
            highlighted: None,
        })
    }

    fn set_highlight(&mut self, target: Option<u8>) {
        if self.highlighted == target {
            return;
        }
        if let Some(el) = self.highlighted.and_then(|d| self.door(d)) {
            el.set_class_name("dc-door");
        }
        if let Some(el) = target.and_then(|d| self.door(d)) {
            el.set_class_name("dc-door dc-bounce");
        }
        self.highlighted = target;
    }

    fn door(&self, door: u8) -> Option<&Element> {
        self.doors.get(usize::from(door).checked_sub(1)?)
    }

    fn build_toast(&self, note: &Notification) -> Result<Element, GameError> {
        let toast = self.doc.create_element("div")?;
        toast.set_class_name(if note.is_success() {
            "dc-toast dc-toast-ok"
        } else {
            "dc-toast dc-toast-bad"
        });
        toast.set_attribute("role", "status")?;
        let title = self.doc.create_element("strong")?;
        title.set_text_content(Some(note.title()));
        let body = self.doc.create_element("div")?;
        body.set_text_content(Some(&note.description()));
        toast.append_child(&title)?;
        toast.append_child(&body)?;
        Ok(toast)
    }
}

impl Presentation for DomPresentation {
    fn render(&mut self, view: &RoundView) {
        self.score.set_text_content(Some(&format!("Score: {}", view.score)));
        match view.prompt() {
            Some(text) => {
                self.prompt.set_text_content(Some(&text));
                self.prompt.set_hidden(false);
            }
            None => {
                self.prompt.set_text_content(None);
                self.prompt.set_hidden(true);
            }
        }
        self.set_highlight(if view.active { view.target } else { None });
    }

    fn notify(&mut self, note: &Notification) {
        let toast = match self.build_toast(note) {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!(%err, "toast not shown");
                return;
            }
        };
        if self.toasts.append_child(&toast).is_err() {
            return;
        }
        let dismiss = Closure::once_into_js(move || toast.remove());
        if let Some(win) = window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                dismiss.unchecked_ref(),
                TOAST_MS,
            );
        }
    }
}

fn ensure_style(doc: &Document) -> Result<(), GameError> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLE));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => doc.body().ok_or(GameError::NoBody)?.append_child(&style)?,
    };
    Ok(())
}

fn door_button(doc: &Document, door: u8) -> Result<Element, GameError> {
    let button = doc.create_element("button")?;
    button.set_class_name("dc-door");
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", &format!("Door {door}"))?;

    let knob = doc.create_element("span")?;
    knob.set_class_name("dc-knob");
    knob.set_attribute("aria-hidden", "true")?;
    knob.set_attribute("role", "presentation")?;
    let label = doc.create_element("span")?;
    label.set_text_content(Some(&door.to_string()));
    button.append_child(&knob)?;
    button.append_child(&label)?;

    let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
        super::click_door(u32::from(door));
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(button)
}
