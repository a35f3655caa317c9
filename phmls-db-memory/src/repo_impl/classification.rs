use super::*;

impl ClassificationRepo for DbConnection<'_> {
    fn get_property_category(&self, id: Id) -> Result<PropertyCategory> {
        get(&self.tables().categories, &id)
    }
    fn get_property_type(&self, id: Id) -> Result<PropertyType> {
        get(&self.tables().property_types, &id)
    }
    fn get_property_subtype(&self, id: Id) -> Result<PropertySubtype> {
        get(&self.tables().subtypes, &id)
    }

    fn all_property_categories(&self) -> Result<Vec<PropertyCategory>> {
        Ok(self.tables().categories.values().cloned().collect())
    }

    fn upsert_property_category(&self, category: PropertyCategory) -> Result<()> {
        self.tables_mut()?.categories.insert(category.id, category);
        Ok(())
    }
    fn upsert_property_type(&self, property_type: PropertyType) -> Result<()> {
        self.tables_mut()?
            .property_types
            .insert(property_type.id, property_type);
        Ok(())
    }
    fn upsert_property_subtype(&self, subtype: PropertySubtype) -> Result<()> {
        self.tables_mut()?.subtypes.insert(subtype.id, subtype);
        Ok(())
    }
}
