use iced::{
    Element, Length,
    widget::{Column, Container, button, column, container, row, rule, scrollable, text},
};
use stockroom_lib::model::Asset;

use super::{Equipment, Message};

const COLUMNS: [(&str, u16); 8] = [
    ("Desktop", 3),
    ("Branch", 3),
    ("Sub-branch", 3),
    ("Group", 2),
    ("Tag", 2),
    ("Serial", 2),
    ("Status", 2),
    ("Price", 2),
];

impl Equipment {
    pub(super) fn table_view(&self) -> Container<'_, Message> {
        let header = row(COLUMNS
            .iter()
            .map(|(name, portion)| cell(name.to_string(), *portion))
            .chain([text("").width(Length::Fixed(140.0)).into()]))
        .spacing(8)
        .padding([0, 12]);

        let rows = Column::with_children(self.form.assets().iter().map(|a| self.asset_row(a)))
            .spacing(4);

        container(
            column![
                self.status_line(),
                header,
                rule::horizontal(1),
                scrollable(rows).height(Length::Fill),
            ]
            .spacing(8),
        )
        .height(Length::Fill)
    }

    fn asset_row<'a>(&'a self, asset: &'a Asset) -> Element<'a, Message> {
        let values = [
            asset.desktop_name.clone(),
            asset.branch_name.clone(),
            asset.sub_branch.clone(),
            asset.group_name.clone(),
            asset.tag_name.clone(),
            asset.serial_number.clone(),
            asset.status.clone(),
            format!("{:.2}", asset.price),
        ];

        let cells = values
            .into_iter()
            .zip(COLUMNS.iter())
            .map(|(value, (_, portion))| cell(value, *portion));

        let style = if self.form.mode().target() == Some(asset.id) {
            container::rounded_box
        } else {
            container::bordered_box
        };

        container(
            row(cells.chain([
                button("Edit")
                    .style(button::secondary)
                    .on_press(Message::EditPressed(asset.id))
                    .into(),
                button("Delete")
                    .style(button::danger)
                    .on_press(Message::DeletePressed(asset.id))
                    .into(),
            ]))
            .spacing(8)
            .padding(12),
        )
        .width(Length::Fill)
        .style(style)
        .into()
    }
}

fn cell<'a>(content: String, portion: u16) -> Element<'a, Message> {
    text(content).width(Length::FillPortion(portion)).into()
}
