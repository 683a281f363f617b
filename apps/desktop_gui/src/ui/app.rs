use crossbeam_channel::{Receiver, Sender};
use shared::{domain::UserRecord, protocol::UserDraft};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

/// Controlled form state mirroring one user record. Phone is optional; the
/// other two fields gate submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct UserForm {
    full_name: String,
    email: String,
    phone_number: String,
}

impl UserForm {
    fn from_record(record: &UserRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone().unwrap_or_default(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.email.trim().is_empty()
    }

    fn to_draft(&self) -> UserDraft {
        let phone = self.phone_number.trim();
        UserDraft {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            },
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    users: Vec<UserRecord>,
    loading: bool,
    error_banner: Option<String>,
    status: String,
    show_form: bool,
    editing: Option<UserRecord>,
    form: UserForm,
    pending_delete: Option<UserRecord>,
}

impl DesktopGuiApp {
    pub fn bootstrap(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            users: Vec::new(),
            loading: false,
            error_banner: None,
            status: String::new(),
            show_form: false,
            editing: None,
            form: UserForm::default(),
            pending_delete: None,
        };
        app.request_load();
        app
    }

    fn request_load(&mut self) {
        self.loading = true;
        self.error_banner = None;
        dispatch_backend_command(&self.cmd_tx, BackendCommand::LoadUsers, &mut self.status);
    }

    /// No-op when a required field is blank or a request is in flight; the
    /// submit control is disabled in those states as well.
    fn submit_form(&mut self) {
        if self.loading || !self.form.is_complete() {
            return;
        }
        self.error_banner = None;
        self.loading = true;
        let draft = self.form.to_draft();
        let cmd = match &self.editing {
            Some(record) => BackendCommand::UpdateUser {
                user_id: record.id,
                draft,
            },
            None => BackendCommand::CreateUser { draft },
        };
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn begin_edit(&mut self, record: UserRecord) {
        self.form = UserForm::from_record(&record);
        self.editing = Some(record);
        self.show_form = true;
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.editing = None;
        self.show_form = false;
    }

    fn toggle_form(&mut self) {
        if self.show_form {
            self.reset_form();
        } else {
            self.show_form = true;
        }
    }

    fn request_delete(&mut self, record: UserRecord) {
        self.pending_delete = Some(record);
    }

    fn confirm_delete(&mut self) {
        if let Some(record) = self.pending_delete.take() {
            self.error_banner = None;
            self.loading = true;
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::DeleteUser { user_id: record.id },
                &mut self.status,
            );
        }
    }

    fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::UsersLoaded(users) => {
                    self.users = users;
                    self.loading = false;
                    self.status = format!("{} usuarios", self.users.len());
                }
                UiEvent::UserSaved(record) => {
                    self.status = format!("Usuario guardado: {}", record.full_name);
                    self.reset_form();
                }
                UiEvent::UserDeleted(user_id) => {
                    self.status = format!("Usuario {} eliminado", user_id.0);
                }
                UiEvent::Error(err) => {
                    tracing::warn!(detail = err.detail(), "operation failed");
                    self.error_banner = Some(err.message().to_string());
                    self.loading = false;
                }
            }
        }
    }

    fn form_section(&mut self, ui: &mut egui::Ui) {
        ui.heading(if self.editing.is_some() {
            "Editar Usuario"
        } else {
            "Nuevo Usuario"
        });

        egui::Grid::new("user_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Nombre Completo *");
                ui.text_edit_singleline(&mut self.form.full_name);
                ui.end_row();

                ui.label("Email *");
                ui.text_edit_singleline(&mut self.form.email);
                ui.end_row();

                ui.label("Número de Teléfono");
                ui.text_edit_singleline(&mut self.form.phone_number);
                ui.end_row();
            });

        let submit_label = if self.loading {
            "Guardando..."
        } else if self.editing.is_some() {
            "Actualizar"
        } else {
            "Crear"
        };
        let can_submit = !self.loading && self.form.is_complete();

        let mut submitted = false;
        let mut canceled = false;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_submit, egui::Button::new(submit_label))
                .clicked()
            {
                submitted = true;
            }
            if ui
                .add_enabled(!self.loading, egui::Button::new("Cancelar"))
                .clicked()
            {
                canceled = true;
            }
        });
        if submitted {
            self.submit_form();
        } else if canceled {
            self.reset_form();
        }
    }

    fn users_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Lista de Usuarios");
        if self.loading {
            ui.label("Cargando...");
        }
        if !self.loading && self.users.is_empty() {
            ui.label("No hay usuarios registrados");
            return;
        }

        let mut edit_request: Option<UserRecord> = None;
        let mut delete_request: Option<UserRecord> = None;
        let loading = self.loading;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("users_table")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("ID");
                    ui.strong("Nombre Completo");
                    ui.strong("Email");
                    ui.strong("Teléfono");
                    ui.strong("Acciones");
                    ui.end_row();

                    for user in &self.users {
                        ui.label(user.id.0.to_string());
                        ui.label(&user.full_name);
                        ui.label(&user.email);
                        ui.label(user.phone_number.as_deref().unwrap_or("N/A"));
                        ui.horizontal(|ui| {
                            if ui
                                .add_enabled(!loading, egui::Button::new("Editar"))
                                .clicked()
                            {
                                edit_request = Some(user.clone());
                            }
                            if ui
                                .add_enabled(!loading, egui::Button::new("Eliminar"))
                                .clicked()
                            {
                                delete_request = Some(user.clone());
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        if let Some(record) = edit_request {
            self.begin_edit(record);
        }
        if let Some(record) = delete_request {
            self.request_delete(record);
        }
    }

    fn delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(record) = self.pending_delete.clone() else {
            return;
        };

        let mut confirmed = false;
        let mut canceled = false;
        egui::Window::new("Confirmar eliminación")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("¿Estás seguro de eliminar este usuario?");
                ui.label(format!("{} <{}>", record.full_name, record.email));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Eliminar").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancelar").clicked() {
                        canceled = true;
                    }
                });
            });

        if confirmed {
            self.confirm_delete();
        } else if canceled {
            self.cancel_delete();
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Gestión de Usuarios");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.show_form {
                        "Cancelar"
                    } else {
                        "Nuevo Usuario"
                    };
                    let loading = self.loading;
                    if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                        self.toggle_form();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.error_banner.clone() {
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
                ui.separator();
            }

            if self.show_form {
                self.form_section(ui);
                ui.separator();
            }

            self.users_section(ui);
        });

        self.delete_confirmation(ctx);

        // Worker events arrive off-thread; poll for them between frames.
        ctx.request_repaint_after(std::time::Duration::from_millis(150));
    }
}
