use iced::{
    Element, Length,
    widget::{Column, Container, button, column, combo_box, container, row, space, text, text_input},
};
use stockroom_lib::draft::{EditMode, Field};
use strum::IntoEnumIterator;

use super::{Equipment, Message};

const LABEL_WIDTH: f32 = 140.0;

impl Equipment {
    pub(super) fn form_view(&self) -> Container<'_, Message> {
        let draft = self.form.draft();

        let title = match self.form.mode() {
            EditMode::Create => text("New asset").size(20),
            EditMode::Update(id) => text(format!("Edit asset #{id}")).size(20),
        };

        let selected_sub_branch = self
            .form
            .sub_branch_options()
            .iter()
            .find(|o| o.as_str() == draft.get(Field::SubBranch));

        let selectors = column![
            labeled(
                Field::BranchId.label(),
                combo_box(
                    &self.branch_options,
                    "Select a branch...",
                    self.form.selected_branch(),
                    Message::BranchSelected
                )
                .into()
            ),
            labeled(
                Field::SubBranch.label(),
                combo_box(
                    &self.sub_branch_options,
                    "Select a branch first",
                    selected_sub_branch,
                    Message::SubBranchSelected
                )
                .into()
            ),
            labeled(
                Field::GroupId.label(),
                combo_box(
                    &self.group_options,
                    "Select a group...",
                    self.form.selected_group(),
                    Message::GroupSelected
                )
                .into()
            ),
        ]
        .spacing(8);

        let inputs = Column::with_children(
            Field::iter()
                .filter(Field::is_free_text)
                .map(|field| input_row(field, draft.get(field))),
        )
        .spacing(8);

        let submit_label = if self.form.mode().is_edit() {
            "Update"
        } else {
            "Add"
        };
        let can_submit = draft.is_valid() && !self.submitting;

        container(
            column![
                title,
                selectors,
                inputs,
                space::vertical(),
                row![
                    space::horizontal(),
                    button("Cancel")
                        .style(button::secondary)
                        .on_press(Message::CancelPressed),
                    button(submit_label).on_press_maybe(can_submit.then_some(Message::SubmitPressed)),
                ]
                .spacing(8),
            ]
            .spacing(12),
        )
        .padding(20)
        .height(Length::Fill)
        .style(container::bordered_box)
    }
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).width(Length::Fixed(LABEL_WIDTH)), control]
        .spacing(8)
        .into()
}

fn input_row(field: Field, value: &str) -> Element<'_, Message> {
    labeled(
        field.label(),
        text_input(field.label(), value)
            .on_input(move |content| Message::FieldInput(field, content))
            .into(),
    )
}
