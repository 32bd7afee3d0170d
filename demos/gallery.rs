// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery: one button per severity, plus a persistent error
//! with an action. Run with `cargo run --example gallery`.

use iced::widget::{button, column, row, stack, text};
use iced::{Element, Length, Subscription};
use iced_toaster::widget::ToastCard;
use iced_toaster::{
    mount_provider, show, Manager, ManagerMessage, Severity, Toast, ToastAction, ToastHost,
};

fn main() -> iced::Result {
    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .title("iced_toaster gallery")
        .run()
}

struct Gallery {
    manager: Manager,
}

#[derive(Debug, Clone, Copy)]
enum Message {
    Show(Severity),
    ShowPersistent,
    Toaster(ManagerMessage),
}

impl Gallery {
    fn new() -> Self {
        let mut manager = Manager::new();
        manager.mount(mount_provider());
        Self { manager }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Show(severity) => {
                show(
                    &mut self.manager,
                    Toast::new(format!("A {severity} toast"))
                        .severity(severity)
                        .description("Dismisses after five seconds"),
                );
            }
            Message::ShowPersistent => {
                show(
                    &mut self.manager,
                    Toast::error("Export failed")
                        .description("Could not write output file")
                        .action(ToastAction::new("Retry"))
                        .persistent(),
                );
            }
            Message::Toaster(inner) => self.manager.handle_message(inner),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let triggers = row![
            button(text("default")).on_press(Message::Show(Severity::Default)),
            button(text("info")).on_press(Message::Show(Severity::Info)),
            button(text("success")).on_press(Message::Show(Severity::Success)),
            button(text("warning")).on_press(Message::Show(Severity::Warning)),
            button(text("error")).on_press(Message::Show(Severity::Error)),
            button(text("persistent + action")).on_press(Message::ShowPersistent),
        ]
        .spacing(8);

        let content = column![text("iced_toaster gallery").size(20), triggers]
            .spacing(16)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill);

        let overlay = ToastCard::view_overlay(&self.manager).map(Message::Toaster);

        stack![content, overlay].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.manager.subscription().map(Message::Toaster)
    }
}
