//! XEP-0004: Data Forms
//!
//! Forms are filled through [`DataForm`] and frozen by [`DataForm::submit`],
//! which consumes the form and returns a read-only [`SubmittedForm`]. A
//! submitted form has no mutators, so it cannot be changed or submitted again.
//!
//! ## XML Format
//!
//! ```xml
//! <x xmlns='jabber:x:data' type='submit'>
//!   <field var='FORM_TYPE' type='hidden'>
//!     <value>urn:xmpp:mam:1</value>
//!   </field>
//!   <field var='with'><value>juliet@capulet.lit</value></field>
//! </x>
//! ```

use crate::element::Element;

/// Data Forms namespace.
pub const NS_DATA_FORMS: &str = "jabber:x:data";

/// Name of the hidden field that identifies the form's schema.
pub const FORM_TYPE: &str = "FORM_TYPE";

/// A single form field and its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    var: String,
    field_type: Option<String>,
    values: Vec<String>,
}

impl Field {
    fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
            field_type: None,
            values: Vec::new(),
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn field_type(&self) -> Option<&str> {
        self.field_type.as_deref()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First value, for single-valued fields.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    fn to_element(&self) -> Element {
        let mut field = Element::new("field");
        field.set_attribute("var", &self.var);
        field.set_optional_attribute("type", self.field_type.as_deref());
        for value in &self.values {
            field.add_child("value").set_content(value.as_str());
        }
        field
    }
}

/// A form being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataForm {
    fields: Vec<Field>,
}

impl DataForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form whose `FORM_TYPE` is `form_type`.
    pub fn with_form_type(form_type: &str) -> Self {
        let mut form = Self::new();
        form.set_form_type(form_type);
        form
    }

    /// Set the hidden `FORM_TYPE` field, keeping it first.
    pub fn set_form_type(&mut self, form_type: &str) -> &mut Self {
        match self.field_mut(FORM_TYPE) {
            Some(field) => field.values = vec![form_type.to_string()],
            None => {
                let mut field = Field::new(FORM_TYPE);
                field.values.push(form_type.to_string());
                self.fields.insert(0, field);
            }
        }
        if let Some(field) = self.field_mut(FORM_TYPE) {
            field.field_type = Some("hidden".to_string());
        }
        self
    }

    /// Set a single-valued field, replacing any previous values.
    pub fn put(&mut self, var: &str, value: impl Into<String>) -> &mut Self {
        self.put_values(var, [value.into()])
    }

    /// Set a multi-valued field, replacing any previous values.
    pub fn put_values<I, S>(&mut self, var: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        match self.field_mut(var) {
            Some(field) => field.values = values,
            None => {
                let mut field = Field::new(var);
                field.values = values;
                self.fields.push(field);
            }
        }
        self
    }

    pub fn field(&self, var: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.var == var)
    }

    fn field_mut(&mut self, var: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.var == var)
    }

    pub fn get(&self, var: &str) -> Option<&str> {
        self.field(var).and_then(Field::value)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn form_type(&self) -> Option<&str> {
        self.get(FORM_TYPE)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze the form for sending.
    pub fn submit(self) -> SubmittedForm {
        SubmittedForm {
            fields: self.fields,
        }
    }

    /// Render as an unsubmitted `type='form'` element.
    pub fn to_element(&self) -> Element {
        render("form", &self.fields)
    }
}

impl<K, V> FromIterator<(K, V)> for DataForm
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut form = DataForm::new();
        for (var, value) in iter {
            form.put(var.as_ref(), value);
        }
        form
    }
}

/// A submitted, read-only form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedForm {
    fields: Vec<Field>,
}

impl SubmittedForm {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, var: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.var == var).and_then(Field::value)
    }

    pub fn form_type(&self) -> Option<&str> {
        self.get(FORM_TYPE)
    }

    /// Render as a `type='submit'` element.
    pub fn to_element(&self) -> Element {
        render("submit", &self.fields)
    }
}

impl From<SubmittedForm> for Element {
    fn from(form: SubmittedForm) -> Self {
        form.to_element()
    }
}

impl From<&SubmittedForm> for Element {
    fn from(form: &SubmittedForm) -> Self {
        form.to_element()
    }
}

fn render(form_type: &str, fields: &[Field]) -> Element {
    let mut x = Element::with_namespace("x", NS_DATA_FORMS);
    x.set_attribute("type", form_type);
    for field in fields {
        x.append(field.to_element());
    }
    x
}
