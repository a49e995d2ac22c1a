//! Client → project → task cascade behind the "Add Project" dialog

use crate::models::Project;
use crate::timesheet::{RowKey, TimeRow};

#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerProject {
    pub id: i64,
    pub name: String,
    pub tasks: Vec<PickerOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerClient {
    pub id: i64,
    pub name: String,
    pub projects: Vec<PickerProject>,
}

/// Choices for a new grid row, grouped by client in server order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPicker {
    clients: Vec<PickerClient>,
    client: Option<i64>,
    project: Option<i64>,
    task: Option<i64>,
}

impl ProjectPicker {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut clients: Vec<PickerClient> = Vec::new();
        for project in projects {
            let index = match clients.iter().position(|c| c.id == project.client_id) {
                Some(i) => i,
                None => {
                    clients.push(PickerClient {
                        id: project.client_id,
                        name: project.client_name.clone(),
                        projects: Vec::new(),
                    });
                    clients.len() - 1
                }
            };
            clients[index].projects.push(PickerProject {
                id: project.id,
                name: project.name.clone(),
                tasks: project
                    .tasks
                    .iter()
                    .map(|t| PickerOption {
                        id: t.id,
                        name: t.name.clone(),
                    })
                    .collect(),
            });
        }

        let client = clients.first();
        let project = client.and_then(|c| c.projects.first());
        let task = project.and_then(|p| p.tasks.first());
        Self {
            client: client.map(|c| c.id),
            project: project.map(|p| p.id),
            task: task.map(|t| t.id),
            clients,
        }
    }

    pub fn clients(&self) -> &[PickerClient] {
        &self.clients
    }

    pub fn client(&self) -> Option<&PickerClient> {
        self.client
            .and_then(|id| self.clients.iter().find(|c| c.id == id))
    }

    pub fn project(&self) -> Option<&PickerProject> {
        let id = self.project?;
        self.client()?.projects.iter().find(|p| p.id == id)
    }

    pub fn task(&self) -> Option<&PickerOption> {
        let id = self.task?;
        self.project()?.tasks.iter().find(|t| t.id == id)
    }

    pub fn projects(&self) -> &[PickerProject] {
        self.client().map(|c| c.projects.as_slice()).unwrap_or(&[])
    }

    pub fn tasks(&self) -> &[PickerOption] {
        self.project().map(|p| p.tasks.as_slice()).unwrap_or(&[])
    }

    /// Switching client selects its first project and that project's first task
    pub fn select_client(&mut self, id: i64) {
        if self.client == Some(id) {
            return;
        }
        let Some(client) = self.clients.iter().find(|c| c.id == id) else {
            return;
        };
        let project = client.projects.first();
        self.client = Some(id);
        self.project = project.map(|p| p.id);
        self.task = project.and_then(|p| p.tasks.first()).map(|t| t.id);
    }

    pub fn select_project(&mut self, id: i64) {
        if self.project == Some(id) {
            return;
        }
        let Some(project) = self.projects().iter().find(|p| p.id == id) else {
            return;
        };
        let task = project.tasks.first().map(|t| t.id);
        self.project = Some(id);
        self.task = task;
    }

    pub fn select_task(&mut self, id: i64) {
        if self.tasks().iter().any(|t| t.id == id) {
            self.task = Some(id);
        }
    }

    /// Empty grid row for the current selection, if it is complete
    pub fn selected_row(&self) -> Option<TimeRow> {
        let client = self.client()?;
        let project = self.project()?;
        let task = self.task()?;
        Some(TimeRow::new(
            RowKey::new(project.id, task.id),
            client.name.clone(),
            project.name.clone(),
            task.name.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectTask;

    fn task(id: i64, name: &str) -> ProjectTask {
        ProjectTask {
            id,
            name: name.into(),
            billable: false,
            rate: 0.0,
        }
    }

    fn project(id: i64, name: &str, client_id: i64, client: &str, tasks: Vec<ProjectTask>) -> Project {
        Project {
            id,
            name: name.into(),
            client_id,
            client_name: client.into(),
            archived: false,
            tasks,
        }
    }

    fn picker() -> ProjectPicker {
        ProjectPicker::from_projects(&[
            project(10, "Site", 1, "Acme", vec![task(100, "Dev"), task(101, "QA")]),
            project(20, "Audit", 2, "Zeta", vec![]),
            project(11, "App", 1, "Acme", vec![task(102, "Design")]),
        ])
    }

    #[test]
    fn test_grouped_in_server_order() {
        let picker = picker();
        assert_eq!(picker.clients().len(), 2);
        assert_eq!(picker.clients()[0].projects.len(), 2);
        assert_eq!(picker.client().unwrap().name, "Acme");
        assert_eq!(picker.project().unwrap().name, "Site");
        assert_eq!(picker.task().unwrap().name, "Dev");
    }

    #[test]
    fn test_client_change_cascades() {
        let mut picker = picker();
        picker.select_client(2);
        assert_eq!(picker.project().unwrap().id, 20);
        assert!(picker.task().is_none());
        assert!(picker.selected_row().is_none());

        picker.select_client(1);
        assert_eq!(picker.project().unwrap().id, 10);
        assert_eq!(picker.task().unwrap().id, 100);
    }

    #[test]
    fn test_project_change_selects_first_task() {
        let mut picker = picker();
        picker.select_task(101);
        picker.select_project(11);
        assert_eq!(picker.task().unwrap().id, 102);
        // Unknown ids are ignored
        picker.select_project(20);
        assert_eq!(picker.project().unwrap().id, 11);
        picker.select_task(100);
        assert_eq!(picker.task().unwrap().id, 102);
    }

    #[test]
    fn test_selected_row() {
        let picker = picker();
        let row = picker.selected_row().unwrap();
        assert_eq!(row.key, RowKey::new(10, 100));
        assert_eq!(row.client_name, "Acme");
    }

    #[test]
    fn test_empty_catalog() {
        let picker = ProjectPicker::from_projects(&[]);
        assert!(picker.client().is_none());
        assert!(picker.projects().is_empty());
        assert!(picker.selected_row().is_none());
    }
}
