use super::record;

record! {
    /// A client company (`/company.json`).
    Company {
        name,
        email,
        phone,
        website,
        abn_number,
        address,
        billing_address,
        parent_company_uuid,
    }
}

record! {
    /// A contact person attached to a company (`/companycontact.json`).
    CompanyContact {
        company_uuid,
        first,
        last,
        email,
        phone,
        mobile,
        r#type,
    }
}
