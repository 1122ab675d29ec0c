use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_accounts::Students;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 紧急联系人表
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contacts::FirstName).string().not_null())
                    .col(ColumnDef::new(Contacts::MiddleName).string().null())
                    .col(ColumnDef::new(Contacts::LastName).string().not_null())
                    .col(ColumnDef::new(Contacts::HomePhone).string().not_null())
                    .col(ColumnDef::new(Contacts::WorkPhone).string().null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(ColumnDef::new(Contacts::Province).string().null())
                    .col(ColumnDef::new(Contacts::City).string().null())
                    .col(ColumnDef::new(Contacts::Address).string().null())
                    .col(ColumnDef::new(Contacts::Postal).string().null())
                    .col(ColumnDef::new(Contacts::Relation).string().not_null())
                    .col(ColumnDef::new(Contacts::Priority).integer().not_null())
                    .col(ColumnDef::new(Contacts::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Contacts::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 学生-联系人关联表
        manager
            .create_table(
                Table::create()
                    .table(StudentContacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentContacts::Sid)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentContacts::ContactId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentContacts::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StudentContacts::Sid)
                            .col(StudentContacts::ContactId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentContacts::Table, StudentContacts::Sid)
                            .to(Students::Table, Students::Sid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentContacts::Table, StudentContacts::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 储物柜表
        manager
            .create_table(
                Table::create()
                    .table(Lockers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lockers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Lockers::LockerNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Lockers::Combo).string().not_null())
                    .col(ColumnDef::new(Lockers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Lockers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 照片表
        manager
            .create_table(
                Table::create()
                    .table(Photos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Photos::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Photos::OwnerRole).string().not_null())
                    .col(ColumnDef::new(Photos::OwnerId).string().not_null())
                    .col(ColumnDef::new(Photos::Url).string().not_null())
                    .col(ColumnDef::new(Photos::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_contacts_contact_id")
                    .table(StudentContacts::Table)
                    .col(StudentContacts::ContactId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_photos_owner")
                    .table(Photos::Table)
                    .col(Photos::OwnerRole)
                    .col(Photos::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Photos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lockers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentContacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Contacts {
    #[sea_orm(iden = "contacts")]
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    HomePhone,
    WorkPhone,
    Email,
    Province,
    City,
    Address,
    Postal,
    Relation,
    Priority,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentContacts {
    #[sea_orm(iden = "student_contacts")]
    Table,
    Sid,
    ContactId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Lockers {
    #[sea_orm(iden = "lockers")]
    Table,
    Id,
    LockerNumber,
    Combo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Photos {
    #[sea_orm(iden = "photos")]
    Table,
    Id,
    OwnerRole,
    OwnerId,
    Url,
    CreatedAt,
}
