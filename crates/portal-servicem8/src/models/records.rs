use super::record;

record! {
    /// File attached to a job or company (`/attachment.json`).
    Attachment {
        related_object,
        related_object_uuid,
        attachment_name,
        file_type,
        timestamp,
    }
}

record! {
    Note { related_object, related_object_uuid, note, create_date }
}

record! {
    Form { name, document_template_uuid }
}

record! {
    /// A completed form (`/formresponse.json`).
    FormResponse {
        form_uuid,
        regarding_object,
        regarding_object_uuid,
        field_data,
        timestamp,
    }
}
