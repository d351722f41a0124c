use std::{sync::Arc, time::Duration};

use iced::{
    Element, Length, Task,
    widget::{column, combo_box, row, text},
};
use stockroom_lib::{
    EquipmentForm, InventoryApi, Notice, Session,
    draft::{EditMode, Field},
    model::{Asset, AssetId, Branch, Group},
};
use tracing::{error, warn};

use crate::components::notice;

mod asset_form;
mod asset_table;

/// How long a notice stays up before it dismisses itself.
const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    BranchesLoaded(Result<Vec<Branch>, String>),
    GroupsLoaded(Result<Vec<Group>, String>),
    AssetsLoaded(Result<Vec<Asset>, String>),
    // Form
    FieldInput(Field, String),
    BranchSelected(Branch),
    GroupSelected(Group),
    SubBranchSelected(String),
    SubmitPressed,
    CancelPressed,
    Submitted(EditMode, Result<(), String>),
    // Asset list
    EditPressed(AssetId),
    DeletePressed(AssetId),
    Deleted(AssetId, Result<(), String>),
    // Notice banner
    NoticeExpired(u64),
    NoticeDismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Loading,
    Error(String),
    Loaded,
}

pub struct Equipment {
    api: Arc<dyn InventoryApi>,
    form: EquipmentForm,
    state: State,
    submitting: bool,
    notice: Option<(u64, Notice)>,
    notice_count: u64,
    /// Set while the last branch fetch failed; the branch picker is empty then.
    branches_error: Option<String>,

    // Widget state
    branch_options: combo_box::State<Branch>,
    group_options: combo_box::State<Group>,
    sub_branch_options: combo_box::State<String>,
}

impl Equipment {
    pub fn new(api: Arc<dyn InventoryApi>, session: Session) -> (Self, Task<Message>) {
        let equipment = Self {
            api,
            form: EquipmentForm::new(session),
            state: State::Loading,
            submitting: false,
            notice: None,
            notice_count: 0,
            branches_error: None,
            branch_options: combo_box::State::new(Vec::new()),
            group_options: combo_box::State::new(Vec::new()),
            sub_branch_options: combo_box::State::new(Vec::new()),
        };
        let task = equipment.load_all();

        (equipment, task)
    }

    /// Fetch branches, groups and assets. The three requests are independent.
    fn load_all(&self) -> Task<Message> {
        Task::batch([
            load_branches(self.api.clone()),
            load_groups(self.api.clone()),
            load_assets(self.api.clone()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reload => return self.load_all(),
            Message::BranchesLoaded(result) => match result {
                Ok(branches) => {
                    self.branches_error = None;
                    self.form.apply_branches(branches);
                    self.branch_options = combo_box::State::new(self.form.branches().to_vec());
                    self.sync_options();
                }
                Err(e) => {
                    error!("Could not load branches: {e}");
                    self.branches_error = Some(e);
                }
            },
            Message::GroupsLoaded(result) => match result {
                Ok(groups) => {
                    self.form.apply_groups(groups);
                    self.sync_options();
                }
                Err(e) => error!("Could not load groups: {e}"),
            },
            Message::AssetsLoaded(result) => match result {
                Ok(assets) => {
                    self.form.apply_assets(assets);
                    self.state = State::Loaded;
                }
                Err(e) => {
                    error!("Could not load assets: {e}");
                    if self.state == State::Loading {
                        self.state = State::Error(e);
                    }
                }
            },
            Message::FieldInput(field, value) => self.form.set_field(field, value),
            Message::BranchSelected(branch) => {
                self.form.select_branch(branch.branch_id);
                self.sync_options();
            }
            Message::GroupSelected(group) => {
                self.form.select_group(group.group_id);
            }
            Message::SubBranchSelected(value) => {
                self.form.select_sub_branch(&value);
            }
            Message::SubmitPressed => {
                let Some(submission) = self.form.prepare_submit() else {
                    return Task::none();
                };
                self.submitting = true;

                let api = self.api.clone();
                let mode = submission.mode;
                return Task::perform(
                    async move {
                        submission
                            .send(api.as_ref())
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::Submitted(mode, result),
                );
            }
            Message::Submitted(mode, result) => {
                self.submitting = false;
                return match result {
                    Ok(()) => {
                        let notice = self.form.finish_submit(mode);
                        self.sync_options();
                        Task::batch([load_assets(self.api.clone()), self.show_notice(notice)])
                    }
                    Err(e) => {
                        error!("Could not save asset: {e}");
                        self.show_notice(Notice::Failed(format!("Could not save asset: {e}")))
                    }
                };
            }
            Message::CancelPressed => {
                self.form.reset();
                self.sync_options();
            }
            Message::EditPressed(id) => {
                if let Err(e) = self.form.edit_by_id(id) {
                    warn!("{e}");
                }
                self.sync_options();
            }
            Message::DeletePressed(id) => {
                let api = self.api.clone();
                return Task::perform(
                    async move { api.delete_asset(id).await.map_err(|e| e.to_string()) },
                    move |result| Message::Deleted(id, result),
                );
            }
            Message::Deleted(id, result) => {
                return match result {
                    Ok(()) => {
                        self.form.finish_delete(id);
                        self.sync_options();
                        load_assets(self.api.clone())
                    }
                    Err(e) => {
                        error!("Could not delete asset {id}: {e}");
                        self.show_notice(Notice::Failed(format!("Could not delete asset: {e}")))
                    }
                };
            }
            Message::NoticeExpired(id) => {
                if self.notice.as_ref().is_some_and(|(current, _)| *current == id) {
                    self.notice = None;
                }
            }
            Message::NoticeDismissed => self.notice = None,
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body = row![
            self.form_view().width(Length::FillPortion(2)),
            self.table_view().width(Length::FillPortion(3)),
        ]
        .spacing(20)
        .height(Length::Fill);

        let mut content = column![].spacing(10).padding(10);
        if let Some((_, notice)) = &self.notice {
            content = content.push(notice::banner(notice, Message::NoticeDismissed));
        }

        content.push(body).into()
    }

    /// Rebuild the combo boxes that depend on the selected branch.
    fn sync_options(&mut self) {
        self.group_options =
            combo_box::State::new(self.form.visible_groups().into_iter().cloned().collect());
        self.sub_branch_options = combo_box::State::new(self.form.sub_branch_options().to_vec());
    }

    fn show_notice(&mut self, notice: Notice) -> Task<Message> {
        self.notice_count += 1;
        let id = self.notice_count;
        self.notice = Some((id, notice));

        Task::perform(
            async move { tokio::time::sleep(NOTICE_TTL).await },
            move |_| Message::NoticeExpired(id),
        )
    }

    fn status_line(&self) -> Element<'_, Message> {
        let assets = match &self.state {
            State::Loading => "Loading assets...".to_string(),
            State::Error(e) => format!("Could not load assets: {e}"),
            State::Loaded => format!("{} assets", self.form.assets().len()),
        };

        match &self.branches_error {
            Some(e) => column![text(assets), text(format!("Could not load branches: {e}"))]
                .spacing(4)
                .into(),
            None => text(assets).into(),
        }
    }
}

fn load_branches(api: Arc<dyn InventoryApi>) -> Task<Message> {
    Task::perform(
        async move { api.list_branches().await.map_err(|e| e.to_string()) },
        Message::BranchesLoaded,
    )
}

fn load_groups(api: Arc<dyn InventoryApi>) -> Task<Message> {
    Task::perform(
        async move { api.list_groups().await.map_err(|e| e.to_string()) },
        Message::GroupsLoaded,
    )
}

fn load_assets(api: Arc<dyn InventoryApi>) -> Task<Message> {
    Task::perform(
        async move { api.list_assets().await.map_err(|e| e.to_string()) },
        Message::AssetsLoaded,
    )
}
