use dioxus::prelude::*;

use crate::model::rental::{BranchDto, CarDto, CustomerDto, EmployeeDto};

/// A single `<option>` of a [`SelectField`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<&CustomerDto> for SelectOption {
    fn from(customer: &CustomerDto) -> Self {
        Self {
            value: customer.id.to_string(),
            label: format!("{} ({})", customer.full_name, customer.phone),
        }
    }
}

impl From<&CarDto> for SelectOption {
    fn from(car: &CarDto) -> Self {
        Self {
            value: car.id.to_string(),
            label: format!("{} - {} ({})", car.plate_number, car.brand, car.model_year),
        }
    }
}

impl From<&BranchDto> for SelectOption {
    fn from(branch: &BranchDto) -> Self {
        Self {
            value: branch.id.to_string(),
            label: format!("{} ({})", branch.location, branch.phone),
        }
    }
}

impl From<&EmployeeDto> for SelectOption {
    fn from(employee: &EmployeeDto) -> Self {
        Self {
            value: employee.id.to_string(),
            label: format!("{} - {}", employee.full_name, employee.position),
        }
    }
}

/// Converts reference rows into dropdown options.
pub fn options<'a, T: 'a>(rows: impl IntoIterator<Item = &'a T>) -> Vec<SelectOption>
where
    SelectOption: From<&'a T>,
{
    rows.into_iter().map(SelectOption::from).collect()
}

#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<SelectOption>,
    selected: String,
) -> Element {
    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: name, "{label}" }
            select { class: "form-select", id: name, name: name, required: true,
                option { value: "", "{placeholder}" }
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == selected,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DateField(name: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: name, "{label}" }
            input {
                class: "form-control",
                id: name,
                name: name,
                r#type: "date",
                required: true,
                value: "{value}"
            }
        }
    }
}
