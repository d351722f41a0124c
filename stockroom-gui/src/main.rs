use std::sync::Arc;

use iced::{
    Element,
    Length::Fill,
    Task, Theme, application,
    widget::{button, column, container, row, space, text},
};
use parking_lot::RwLock;
use stockroom_lib::{
    HttpInventoryApi, Session, SessionStore,
    access::Scope,
    config::ClientConfig,
};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::equipment::{self, Equipment},
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Equipment(equipment::Message),
    ThemeButtonPressed,
}

struct App {
    title: String,
    cfg: Cfg,
    session: Session,
    // Components
    equipment: Equipment,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Could not install logger: {e}");
        }

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let client_cfg = ClientConfig::load().unwrap_or_else(|e| {
            warn!("Using default client config: {e}");
            ClientConfig::default()
        });
        let session = SessionStore::open()
            .map(|store| store.get())
            .unwrap_or_else(|e| {
                warn!("Starting without a session: {e}");
                Session::default()
            });

        info!("Using inventory service at {}", client_cfg.api_url());
        let api = Arc::new(HttpInventoryApi::new(client_cfg.api_url()));
        let (equipment, equipment_task) = Equipment::new(api, session.clone());

        (
            Self {
                title: "Stockroom".into(),
                cfg,
                session,
                equipment,
            },
            equipment_task.map(Message::Equipment),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to relevant child components
            Message::Equipment(msg) => self.equipment.update(msg).map(Message::Equipment),
            Message::ThemeButtonPressed => {
                let mut cfg = self.cfg.write();
                cfg.theme = cfg.theme.next();
                cfg.save();
                Task::none()
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let scope = match Scope::of(&self.session) {
            Scope::All => "All branches".to_string(),
            Scope::Branch(id) => format!("Branch {id}"),
            Scope::Nothing => "No branch assigned".to_string(),
        };

        column![
            // Top bar
            container(
                row![
                    text("Equipment").size(24),
                    space::horizontal(),
                    text(scope),
                    button("Reload")
                        .style(button::secondary)
                        .on_press(Message::Equipment(equipment::Message::Reload)),
                    button(text(format!("Theme: {}", self.cfg.read().theme)))
                        .style(button::secondary)
                        .on_press(Message::ThemeButtonPressed),
                ]
                .spacing(10)
            )
            .padding(10),
            // Assets
            self.equipment.view().map(Message::Equipment),
        ]
        .height(Fill)
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }
}
