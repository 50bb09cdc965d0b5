//! Endpoint methods, one set per ServiceM8 resource.
//!
//! Each resource gets `list_*`, `get_*`, `create_*`, `update_*`, and
//! `delete_*`, all forwarding to the dispatch core in [`crate::client`].

use crate::error::ServiceM8Error;
use crate::filter::Filter;
use crate::models::{
    Attachment, Badge, Category, Company, CompanyContact, Form, FormResponse, Job, JobActivity,
    JobContact, JobMaterial, JobPayment, JobQueue, Location, Material, Note, Staff, TaxRate,
};
use crate::ServiceM8Client;

macro_rules! endpoints {
    ($($model:ty, $resource:literal => $list:ident, $get:ident, $create:ident, $update:ident, $delete:ident;)*) => {
        impl ServiceM8Client {
            $(
                #[doc = concat!("List `", $resource, "` records, optionally narrowed by a `$filter`.")]
                ///
                /// # Errors
                ///
                /// Returns [`ServiceM8Error`] on transport failure, a
                /// non-success status, or an undecodable body.
                pub async fn $list(&self, filter: Option<&Filter>) -> Result<Vec<$model>, ServiceM8Error> {
                    self.fetch_list(concat!("/", $resource, ".json"), filter).await
                }

                #[doc = concat!("Fetch one `", $resource, "` record.")]
                ///
                /// # Errors
                ///
                /// Returns [`ServiceM8Error::NotFound`] for an unknown UUID.
                pub async fn $get(&self, uuid: &str) -> Result<$model, ServiceM8Error> {
                    self.fetch_one(concat!("/", $resource, "/{uuid}.json"), uuid).await
                }

                #[doc = concat!("Create a `", $resource, "` record and return its new UUID.")]
                ///
                /// # Errors
                ///
                /// Returns [`ServiceM8Error::Parse`] if the response lacks the
                /// record UUID header.
                pub async fn $create(&self, record: &$model) -> Result<String, ServiceM8Error> {
                    self.create_record(concat!("/", $resource, ".json"), record).await
                }

                #[doc = concat!("Update fields of a `", $resource, "` record.")]
                ///
                /// # Errors
                ///
                /// Returns [`ServiceM8Error`] on any non-success status.
                pub async fn $update(&self, uuid: &str, record: &$model) -> Result<(), ServiceM8Error> {
                    self.update_record(concat!("/", $resource, "/{uuid}.json"), uuid, record).await
                }

                #[doc = concat!("Soft-delete a `", $resource, "` record.")]
                ///
                /// # Errors
                ///
                /// Returns [`ServiceM8Error`] on any non-success status.
                pub async fn $delete(&self, uuid: &str) -> Result<(), ServiceM8Error> {
                    self.delete_record(concat!("/", $resource, "/{uuid}.json"), uuid).await
                }
            )*
        }
    };
}

endpoints! {
    Job, "job" => list_jobs, get_job, create_job, update_job, delete_job;
    Company, "company" => list_companies, get_company, create_company, update_company, delete_company;
    CompanyContact, "companycontact" => list_company_contacts, get_company_contact, create_company_contact, update_company_contact, delete_company_contact;
    JobContact, "jobcontact" => list_job_contacts, get_job_contact, create_job_contact, update_job_contact, delete_job_contact;
    JobActivity, "jobactivity" => list_job_activities, get_job_activity, create_job_activity, update_job_activity, delete_job_activity;
    JobMaterial, "jobmaterial" => list_job_materials, get_job_material, create_job_material, update_job_material, delete_job_material;
    JobPayment, "jobpayment" => list_job_payments, get_job_payment, create_job_payment, update_job_payment, delete_job_payment;
    Attachment, "attachment" => list_attachments, get_attachment, create_attachment, update_attachment, delete_attachment;
    Staff, "staff" => list_staff, get_staff, create_staff, update_staff, delete_staff;
    Material, "material" => list_materials, get_material, create_material, update_material, delete_material;
    Category, "category" => list_categories, get_category, create_category, update_category, delete_category;
    Location, "location" => list_locations, get_location, create_location, update_location, delete_location;
    Note, "note" => list_notes, get_note, create_note, update_note, delete_note;
    Form, "form" => list_forms, get_form, create_form, update_form, delete_form;
    FormResponse, "formresponse" => list_form_responses, get_form_response, create_form_response, update_form_response, delete_form_response;
    JobQueue, "jobqueue" => list_job_queues, get_job_queue, create_job_queue, update_job_queue, delete_job_queue;
    Badge, "badge" => list_badges, get_badge, create_badge, update_badge, delete_badge;
    TaxRate, "taxrate" => list_tax_rates, get_tax_rate, create_tax_rate, update_tax_rate, delete_tax_rate;
}

impl ServiceM8Client {
    /// Jobs belonging to one client company.
    ///
    /// # Errors
    ///
    /// See [`ServiceM8Client::list_jobs`].
    pub async fn jobs_for_company(&self, company_uuid: &str) -> Result<Vec<Job>, ServiceM8Error> {
        self.list_jobs(Some(&Filter::company(company_uuid))).await
    }
}
